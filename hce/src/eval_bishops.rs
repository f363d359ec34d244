use super::HCEConfig;
use crate::context::EvalContext;
use crate::pawn_structure::Shade;
use cozy_chess::Piece;
use evaluation::EvalBoard;

// Own pawns on the bishop's square color block its diagonals.
pub(super) fn evaluate<B: EvalBoard>(ctx: &EvalContext<B>, config: &HCEConfig) -> i16 {
    let bishops = ctx.own(Piece::Bishop);
    if bishops.is_empty() {
        return 0;
    }

    let mut cp = 0i16;
    for sq in bishops {
        let blockers = ctx.pawns.pawns_on_shade(Shade::of(sq)) as i16;
        cp -= config.bad_bishop_penalty * blockers;
    }
    cp
}
