use cozy_chess::{Board, Piece};

// Non-pawn material weights; a full opening set adds up to OPENING_PHASE.
const PHASE_WEIGHTS: [(Piece, u32); 4] = [
    (Piece::Knight, 1),
    (Piece::Bishop, 1),
    (Piece::Rook, 2),
    (Piece::Queen, 4),
];
const OPENING_PHASE: u32 = 24;

/// Share of non-pawn material left on the board, from 1.0 in the opening to
/// 0.0 with bare kings and pawns.
///
/// Promotions can push the weighted count past the opening total, so it is
/// capped.
///
/// <https://www.chessprogramming.org/Game_Phase>
pub fn game_phase(board: &Board) -> f32 {
    let weight: u32 = PHASE_WEIGHTS
        .iter()
        .map(|&(piece, weight)| board.pieces(piece).len() * weight)
        .sum();

    weight.min(OPENING_PHASE) as f32 / OPENING_PHASE as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_is_full_phase() {
        assert_eq!(game_phase(&Board::default()), 1.0);
    }

    #[test]
    fn test_rook_ending() {
        let board: Board = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&board), 2.0 / 24.0);
    }

    #[test]
    fn test_pawns_do_not_count() {
        let board: Board = "4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&board), 0.0);
    }

    #[test]
    fn test_promoted_material_is_capped() {
        let board: Board = "qqqqk3/8/8/8/8/8/8/QQQQK3 w - - 0 1".parse().unwrap();
        assert_eq!(game_phase(&board), 1.0);
    }
}
