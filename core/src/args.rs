use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cozy_chess::Color;
use evaluation::scores::DEFAULT_GRAIN;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser, Debug)]
#[command(name = "coarse")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate a chess position with the coarse hand-crafted evaluator")]
pub struct Args {
    /// Position to evaluate.
    #[arg(short, long, default_value = START_FEN)]
    pub fen: String,

    /// UCI moves played from the position before evaluating.
    #[arg(short, long, num_args = 1..)]
    pub moves: Vec<String>,

    /// Side to score for. Defaults to the side to move.
    #[arg(short, long, value_enum)]
    pub perspective: Option<Side>,

    /// Material only.
    #[arg(short, long)]
    pub quick: bool,

    /// Number of low bits cleared from the score.
    #[arg(short, long, default_value_t = DEFAULT_GRAIN, value_parser = clap::value_parser!(u32).range(0..=8))]
    pub grain: u32,

    /// Log to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}
