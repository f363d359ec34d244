mod args;

use args::Args;
use clap::Parser;
use cozy_chess::{util::parse_uci_move, Board, Color};
use evaluation::HCE;
use hce::{Evaluator, HCEConfig};
use log::{debug, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use utils::{Castled, Position};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let (board, castled) = setup(&args.fen, &args.moves)?;
    debug!("Position: {} (castled: {:?})", board, castled);

    let perspective = args
        .perspective
        .map(Color::from)
        .unwrap_or(board.side_to_move());

    let evaluator = Evaluator::new(HCEConfig {
        grain: args.grain,
        ..HCEConfig::default()
    });
    let position = Position::new(&board).with_castled(castled);

    if args.quick {
        println!("{}", evaluator.evaluate_quick(&position, perspective));
        return Ok(());
    }

    let breakdown = evaluator.breakdown(&position, perspective);
    debug!("Breakdown for {:?}: {:?}", perspective, breakdown);

    println!("{}", evaluator.evaluate_complete(&position, perspective));
    println!("  material        {:>6}", breakdown.material);
    println!("  pawn structure  {:>6}", breakdown.pawn_structure);
    println!("  bad bishops     {:>6}", breakdown.bad_bishops);
    println!("  development     {:>6}", breakdown.development);
    println!("  rooks           {:>6}", breakdown.rooks);
    println!("  king tropism    {:>6}", breakdown.king_tropism);
    println!("  raw total       {:>6}", breakdown.total());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

/// Parses `fen` and plays `moves` on it, tracking who castled on the way.
fn setup(fen: &str, moves: &[String]) -> Result<(Board, Castled), Box<dyn Error>> {
    let mut board: Board = fen
        .parse()
        .map_err(|e| format!("invalid FEN '{}': {:?}", fen, e))?;
    let mut castled = Castled::new();

    for mv_str in moves {
        let mv = parse_uci_move(&board, mv_str)
            .map_err(|e| format!("invalid move '{}': {:?}", mv_str, e))?;
        if !board.is_legal(mv) {
            return Err(format!("illegal move '{}' in {}", mv_str, board).into());
        }

        castled = castled.update(&board, mv);
        board.play_unchecked(mv);
    }

    Ok((board, castled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_tracks_castling() {
        let moves: Vec<String> = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (board, castled) = setup(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &moves,
        )
        .unwrap();

        assert!(castled.has_castled(Color::White));
        assert!(!castled.has_castled(Color::Black));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_setup_rejects_illegal_move() {
        let moves = vec!["e2e5".to_string()];
        assert!(setup(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &moves
        )
        .is_err());
    }

    #[test]
    fn test_setup_rejects_bad_fen() {
        assert!(setup("not a fen", &[]).is_err());
    }
}
