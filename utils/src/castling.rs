use cozy_chess::{Board, Color, Move, Piece};

/// Records which sides have castled during the game.
///
/// The board itself only knows which castling rights remain, so the game
/// driver updates this before each move is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Castled(u8);

impl Castled {
    const WHITE: u8 = 1;
    const BLACK: u8 = 2;

    pub fn new() -> Self {
        Self(0)
    }

    #[inline(always)]
    fn bit(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE,
            Color::Black => Self::BLACK,
        }
    }

    #[inline(always)]
    pub fn has_castled(&self, color: Color) -> bool {
        self.0 & Self::bit(color) != 0
    }

    /// Marks `color` as castled.
    #[inline(always)]
    pub fn with(mut self, color: Color) -> Self {
        self.0 |= Self::bit(color);
        self
    }

    /// Must be called with the board *before* `mv` is played on it.
    #[inline(always)]
    pub fn update(self, board: &Board, mv: Move) -> Self {
        if is_castle(board, mv) {
            self.with(board.side_to_move())
        } else {
            self
        }
    }

    /// Same position seen from the other side of the board.
    pub fn mirrored(self) -> Self {
        Self(((self.0 & Self::WHITE) << 1) | ((self.0 & Self::BLACK) >> 1))
    }
}

#[inline(always)]
pub fn is_castle(board: &Board, mv: Move) -> bool {
    if board.piece_on(mv.from) != Some(Piece::King) {
        return false;
    }

    // cozy-chess encodes castling as the king capturing its own rook
    let us = board.side_to_move();
    if board.colored_pieces(us, Piece::Rook).has(mv.to) {
        return true;
    }

    let f = mv.from.file() as i8;
    let t = mv.to.file() as i8;
    (f - t).abs() == 2
}
