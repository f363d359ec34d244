use cozy_chess::{BitBoard, Board, Color, Piece, Square};
use evaluation::{EvalBoard, PieceValues, Wing};
use std::cell::OnceCell;

use crate::castling::Castled;
use crate::material::game_phase;

/// A board together with the game history the evaluator needs but the board
/// does not keep (who has castled), and lazily computed material.
pub struct Position<'a> {
    pub board: &'a Board,
    castled: Castled,
    piece_values: PieceValues,
    material: OnceCell<i16>,
}

impl<'a> Position<'a> {
    #[inline(always)]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            castled: Castled::new(),
            piece_values: PieceValues::default(),
            material: OnceCell::new(),
        }
    }

    pub fn with_castled(mut self, castled: Castled) -> Self {
        self.castled = castled;
        self
    }

    pub fn with_piece_values(mut self, piece_values: PieceValues) -> Self {
        self.piece_values = piece_values;
        self.material = OnceCell::new();
        self
    }

    #[inline(always)]
    pub fn castled(&self) -> Castled {
        self.castled
    }

    // White-relative material balance (computed once, cached for reuse)
    #[inline(always)]
    fn white_material(&self) -> i16 {
        *self
            .material
            .get_or_init(|| self.piece_values.balance(self.board, game_phase(self.board)))
    }
}

impl EvalBoard for Position<'_> {
    #[inline(always)]
    fn piece_on(&self, color: Color, square: Square) -> Option<Piece> {
        if self.board.colors(color).has(square) {
            self.board.piece_on(square)
        } else {
            None
        }
    }

    #[inline(always)]
    fn pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.board.colored_pieces(color, piece)
    }

    #[inline(always)]
    fn material(&self, perspective: Color) -> i16 {
        match perspective {
            Color::White => self.white_material(),
            Color::Black => -self.white_material(),
        }
    }

    #[inline(always)]
    fn has_castled(&self, color: Color) -> bool {
        self.castled.has_castled(color)
    }

    #[inline(always)]
    fn can_castle(&self, color: Color, wing: Wing) -> bool {
        let rights = self.board.castle_rights(color);
        match wing {
            Wing::KingSide => rights.short.is_some(),
            Wing::QueenSide => rights.long.is_some(),
        }
    }
}
