use super::HCEConfig;
use crate::pawn_structure::PawnStructure;
use cozy_chess::File;

pub(super) fn evaluate(pawns: &PawnStructure, config: &HCEConfig) -> i16 {
    let mut score = 0i16;

    // Two or more pawns on a file hinder each other
    for &count in &pawns.own_file_count {
        if count > 1 {
            score -= config.doubled_pawn_penalty;
        }
    }

    // Isolated: no friendly pawn on either neighbouring file
    for file in 0..File::NUM {
        if pawns.own_file_count[file] == 0 {
            continue;
        }
        let left = if file > 0 { pawns.own_file_count[file - 1] } else { 0 };
        let right = if file + 1 < File::NUM { pawns.own_file_count[file + 1] } else { 0 };
        if left == 0 && right == 0 {
            score -= config.isolated_pawn_penalty;
        }
    }

    // Nudge toward at least one pawn trade to open a file
    if pawns.total_own == 8 {
        score -= config.full_pawn_set_penalty;
    }

    score -= config.pawn_ram_penalty * pawns.rams as i16;

    score += passed_pawns(pawns);

    score
}

// (8 - ranks left to promote)^2 for every passed pawn
fn passed_pawns(pawns: &PawnStructure) -> i16 {
    let perspective = pawns.perspective();
    let mut score = 0i16;
    for file in 0..File::NUM {
        if let Some(pawn) = pawns.passed_pawn(file) {
            let advance = 8 - perspective.promotion_distance(pawn);
            score += advance * advance;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perspective::Perspective;
    use cozy_chess::{Board, Color};
    use utils::Position;

    fn score(fen: &str, color: Color) -> i16 {
        let board: Board = fen.parse().unwrap();
        let pawns = PawnStructure::analyze(&Position::new(&board), Perspective::new(color));
        evaluate(&pawns, &HCEConfig::default())
    }

    #[test]
    fn test_starting_position_only_full_set_penalty() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(score(fen, Color::White), -10);
        assert_eq!(score(fen, Color::Black), -10);
    }

    #[test]
    fn test_isolated_pawns_on_edge_and_interior() {
        // White a2 and h2 are isolated, c2/d2 support each other
        let fen = "4k3/ppppp2p/8/8/8/8/P1PP3P/4K3 w - - 0 1";
        assert_eq!(score(fen, Color::White), -30);
    }

    #[test]
    fn test_doubled_pawns() {
        let fen = "4k3/2pppp2/8/8/8/4P3/3PP3/4K3 w - - 0 1";
        assert_eq!(score(fen, Color::White), -8);
    }

    #[test]
    fn test_pawn_rams() {
        let fen = "4k3/8/8/3pp3/2PPP3/8/8/4K3 w - - 0 1";
        assert_eq!(score(fen, Color::White), -16);
    }

    #[test]
    fn test_passed_pawn_bonus_grows_with_advance() {
        // Lone isolated pawn: -15, plus (8 - d)^2
        assert_eq!(score("4k3/8/P7/8/8/8/8/4K3 w - - 0 1", Color::White), 36 - 15);
        assert_eq!(score("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", Color::White), 49 - 15);
        assert_eq!(score("4k3/8/8/8/8/p7/8/4K3 w - - 0 1", Color::Black), 36 - 15);
    }

    #[test]
    fn test_passed_pawn_bonus_vanishes_when_blocked() {
        // Black b7 still guards the path of a6
        assert_eq!(score("4k3/1p6/P7/8/8/8/8/4K3 w - - 0 1", Color::White), -15);
    }
}
