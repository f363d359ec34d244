// Evaluator traits for position evaluation.
//
// The `evaluation` crate provides shared interfaces and types for evaluation.
// Concrete implementations live in their own crates:
// - `utils` crate: board adapter over cozy-chess (implements EvalBoard)
// - `hce` crate: Hand-Crafted Evaluation (implements HCE trait)
//
// This separation lets the heuristics depend only on the board interface,
// never on a concrete board representation.

use cozy_chess::{BitBoard, Color, Piece, Square};

/// Side of the board a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    KingSide,
    QueenSide,
}

/// Everything the evaluator needs to know about a position.
///
/// Lookups are keyed by (color, piece) and (color, wing) pairs.
pub trait EvalBoard {
    /// The piece of `color` on `square`, or `None` if the square holds no such piece.
    fn piece_on(&self, color: Color, square: Square) -> Option<Piece>;

    /// Occupancy of `piece` for `color`.
    fn pieces(&self, color: Color, piece: Piece) -> BitBoard;

    /// Material balance from `perspective`. Positive = `perspective` is ahead.
    fn material(&self, perspective: Color) -> i16;

    fn has_castled(&self, color: Color) -> bool;

    /// Whether `color` still holds the right to castle on `wing`.
    fn can_castle(&self, color: Color, wing: Wing) -> bool;
}

/// Hand-Crafted Evaluation interface.
pub trait HCE {
    fn name(&self) -> String;

    /// Material-only estimate from `perspective`, quantized.
    fn evaluate_quick<B: EvalBoard>(&self, board: &B, perspective: Color) -> i16;

    /// Material plus positional terms from `perspective`, quantized.
    fn evaluate_complete<B: EvalBoard>(&self, board: &B, perspective: Color) -> i16;
}
