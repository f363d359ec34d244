use super::HCEConfig;
use crate::context::EvalContext;
use cozy_chess::{Piece, Square};
use evaluation::EvalBoard;

// King tropism: knights are rewarded for closing in on the enemy king,
// while rooks and queens pay for sharing neither its rank nor its file.
pub(super) fn evaluate<B: EvalBoard>(ctx: &EvalContext<B>, config: &HCEConfig) -> i16 {
    let us = ctx.perspective.us();
    let (king_rank, king_file) = enemy_king_coords(ctx);

    let mut cp = 0i16;
    for sq in Square::ALL {
        let Some(piece) = ctx.board.piece_on(us, sq) else {
            continue;
        };

        let rank_distance = (sq.rank() as i16 - king_rank).abs();
        let file_distance = (sq.file() as i16 - king_file).abs();

        match piece {
            Piece::Rook => cp -= config.tropism_rook_factor * rank_distance.min(file_distance),
            Piece::Knight => cp += config.tropism_knight_reach - rank_distance - file_distance,
            Piece::Queen => cp -= config.tropism_queen_factor * rank_distance.min(file_distance),
            _ => {}
        }
    }
    cp
}

// A legal position always has the king; fall back to a1 rather than fail.
fn enemy_king_coords<B: EvalBoard>(ctx: &EvalContext<B>) -> (i16, i16) {
    let them = ctx.perspective.them();
    Square::ALL
        .into_iter()
        .find(|&sq| ctx.board.piece_on(them, sq) == Some(Piece::King))
        .map_or((0, 0), |sq| (sq.rank() as i16, sq.file() as i16))
}
