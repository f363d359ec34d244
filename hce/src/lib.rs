mod config;
mod context;
mod eval_bishops;
mod eval_development;
mod eval_king;
mod eval_pawns;
mod eval_rooks;
mod pawn_structure;
mod perspective;

pub use config::HCEConfig;
pub use pawn_structure::{PawnStructure, Shade};
pub use perspective::Perspective;

use context::EvalContext;
use cozy_chess::Color;
use evaluation::scores::quantize;
use evaluation::{EvalBoard, HCE};
use log::debug;

/// Raw per-term scores of a complete evaluation, before quantization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i16,
    pub pawn_structure: i16,
    pub bad_bishops: i16,
    pub development: i16,
    pub rooks: i16,
    pub king_tropism: i16,
}

impl EvalBreakdown {
    pub fn total(&self) -> i16 {
        self.material
            + self.pawn_structure
            + self.bad_bishops
            + self.development
            + self.rooks
            + self.king_tropism
    }
}

/// Hand-Crafted Evaluation: material plus five positional heuristics,
/// coarsened to a fixed grain so the search converges faster.
///
/// The evaluator holds no per-call state, so one instance can serve any
/// number of search threads.
///
/// <https://www.chessprogramming.org/Evaluation>
pub struct Evaluator {
    config: HCEConfig,
}

impl Evaluator {
    pub fn new(config: HCEConfig) -> Self {
        debug!("HCE config: {:?}", config);
        Self { config }
    }

    pub fn config(&self) -> &HCEConfig {
        &self.config
    }

    /// Unquantized score of every term from `perspective`.
    pub fn breakdown<B: EvalBoard>(&self, board: &B, perspective: Color) -> EvalBreakdown {
        let ctx = EvalContext::new(board, Perspective::new(perspective));
        let config = &self.config;

        EvalBreakdown {
            material: board.material(perspective),
            pawn_structure: eval_pawns::evaluate(&ctx.pawns, config),
            bad_bishops: eval_bishops::evaluate(&ctx, config),
            development: eval_development::evaluate(&ctx, config),
            rooks: eval_rooks::evaluate(&ctx, config),
            king_tropism: eval_king::evaluate(&ctx, config),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(HCEConfig::default())
    }
}

impl HCE for Evaluator {
    fn name(&self) -> String {
        "HCE".to_string()
    }

    // Material dominates; when two positions differ this much in material,
    // positional terms cannot change their order.
    #[inline(always)]
    fn evaluate_quick<B: EvalBoard>(&self, board: &B, perspective: Color) -> i16 {
        quantize(board.material(perspective), self.config.grain)
    }

    #[inline(always)]
    fn evaluate_complete<B: EvalBoard>(&self, board: &B, perspective: Color) -> i16 {
        quantize(self.breakdown(board, perspective).total(), self.config.grain)
    }
}
