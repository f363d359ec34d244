use super::HCEConfig;
use crate::context::EvalContext;
use cozy_chess::Piece;
use evaluation::EvalBoard;

// Rooks want the seventh rank, open files and the square behind a passed pawn.
pub(super) fn evaluate<B: EvalBoard>(ctx: &EvalContext<B>, config: &HCEConfig) -> i16 {
    let rooks = ctx.own(Piece::Rook);
    if rooks.is_empty() {
        return 0;
    }

    let perspective = ctx.perspective;
    let pawns = &ctx.pawns;

    let mut cp = 0i16;
    for sq in rooks {
        let file = sq.file() as usize;

        // rook on the rank in front of the enemy back rank
        if perspective.relative_rank(sq) == 6 {
            cp += config.rook_seventh_rank_bonus;
        }

        if pawns.enemy_file_count[file] == 0 {
            cp += if pawns.own_file_count[file] == 0 {
                config.rook_open_file_bonus
            } else {
                config.rook_semi_open_file_bonus
            };
        }

        if let Some(passer) = pawns.passed_pawn(file) {
            if perspective.is_ahead_of(passer, sq) {
                cp += config.rook_behind_passer_bonus;
            }
        }
    }
    cp
}
