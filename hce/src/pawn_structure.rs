use cozy_chess::{File, Piece, Square};
use evaluation::EvalBoard;

use crate::perspective::Perspective;

/// Color of a square, used to match pawns against bishops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light = 0,
    Dark = 1,
}

impl Shade {
    #[inline(always)]
    pub fn of(square: Square) -> Self {
        if (square.rank() as usize % 2) == (square.file() as usize % 2) {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

/// Per-file pawn statistics for one side and its opponent.
///
/// Produced by a single scan of the board for one evaluation call and read
/// by the pawn, bishop and rook terms of that same call. Statistics are only
/// meaningful for the perspective they were computed from.
#[derive(Debug, Clone, Copy)]
pub struct PawnStructure {
    perspective: Perspective,

    pub own_file_count: [u8; File::NUM],
    pub enemy_file_count: [u8; File::NUM],

    // Our pawn nearest promotion on each file
    pub own_most_advanced: [Option<Square>; File::NUM],

    // Enemy pawn nearest its own back rank on each file
    pub enemy_most_backward: [Option<Square>; File::NUM],

    // Our pawns per square shade, indexed by `Shade`
    pub shade_count: [u8; 2],

    pub total_own: u8,

    // Our pawns with an enemy pawn directly in front
    pub rams: u8,
}

impl PawnStructure {
    fn empty(perspective: Perspective) -> Self {
        Self {
            perspective,
            own_file_count: [0; File::NUM],
            enemy_file_count: [0; File::NUM],
            own_most_advanced: [None; File::NUM],
            enemy_most_backward: [None; File::NUM],
            shade_count: [0; 2],
            total_own: 0,
            rams: 0,
        }
    }

    /// Scans the board from our back rank toward the enemy's.
    ///
    /// Because later squares overwrite earlier ones, the per-file entries end
    /// up holding the pawn visited last: our pawn nearest promotion and the
    /// enemy pawn nearest the enemy back rank.
    pub fn analyze<B: EvalBoard>(board: &B, perspective: Perspective) -> Self {
        let us = perspective.us();
        let them = perspective.them();
        let mut stats = Self::empty(perspective);

        for square in perspective.advancing_squares() {
            let file = square.file() as usize;

            if board.piece_on(us, square) == Some(Piece::Pawn) {
                stats.own_file_count[file] += 1;
                stats.total_own += 1;
                stats.own_most_advanced[file] = Some(square);
                stats.shade_count[Shade::of(square) as usize] += 1;

                let rammed = perspective
                    .ahead(square)
                    .is_some_and(|front| board.piece_on(them, front) == Some(Piece::Pawn));
                if rammed {
                    stats.rams += 1;
                }
            } else if board.piece_on(them, square) == Some(Piece::Pawn) {
                stats.enemy_file_count[file] += 1;
                stats.enemy_most_backward[file] = Some(square);
            }
        }

        stats
    }

    #[inline(always)]
    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    #[inline(always)]
    pub fn pawns_on_shade(&self, shade: Shade) -> u8 {
        self.shade_count[shade as usize]
    }

    /// Our most advanced pawn on `file`, if no enemy pawn on this or an
    /// adjacent file stands level with or ahead of it.
    pub fn passed_pawn(&self, file: usize) -> Option<Square> {
        let pawn = self.own_most_advanced[file]?;
        let first = file.saturating_sub(1);
        let last = (file + 1).min(File::NUM - 1);

        let passed = self.enemy_most_backward[first..=last]
            .iter()
            .all(|blocker| match blocker {
                Some(enemy) => self.perspective.is_ahead_of(pawn, *enemy),
                None => true,
            });

        passed.then_some(pawn)
    }
}
