use cozy_chess::{BitBoard, Piece};
use evaluation::EvalBoard;

use crate::pawn_structure::PawnStructure;
use crate::perspective::Perspective;

// Everything a single evaluation call shares between its terms.
// The pawn analysis runs on construction, so no term can observe stale stats.
pub struct EvalContext<'a, B: EvalBoard> {
    pub board: &'a B,
    pub perspective: Perspective,
    pub pawns: PawnStructure,
}

impl<'a, B: EvalBoard> EvalContext<'a, B> {
    #[inline(always)]
    pub fn new(board: &'a B, perspective: Perspective) -> Self {
        Self {
            board,
            perspective,
            pawns: PawnStructure::analyze(board, perspective),
        }
    }

    #[inline(always)]
    pub fn own(&self, piece: Piece) -> BitBoard {
        self.board.pieces(self.perspective.us(), piece)
    }

    #[inline(always)]
    pub fn enemy(&self, piece: Piece) -> BitBoard {
        self.board.pieces(self.perspective.them(), piece)
    }
}
