use cozy_chess::{Color, File, Rank, Square};

/// The side an evaluation is computed for.
///
/// Every heuristic addresses the board through mover-relative ranks, so a
/// single implementation serves both colors. Relative rank 0 is our back
/// rank; pawns advance toward relative rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perspective {
    us: Color,
}

impl Perspective {
    #[inline(always)]
    pub fn new(us: Color) -> Self {
        Self { us }
    }

    #[inline(always)]
    pub fn us(self) -> Color {
        self.us
    }

    #[inline(always)]
    pub fn them(self) -> Color {
        !self.us
    }

    /// Rank of `square` counted from our back rank (0..=7).
    #[inline(always)]
    pub fn relative_rank(self, square: Square) -> usize {
        square.rank().relative_to(self.us) as usize
    }

    /// The square on `file` at `relative_rank` counted from our back rank.
    #[inline(always)]
    pub fn square(self, file: File, relative_rank: Rank) -> Square {
        Square::new(file, relative_rank.relative_to(self.us))
    }

    /// The square one rank closer to the enemy back rank.
    #[inline(always)]
    pub fn ahead(self, square: Square) -> Option<Square> {
        let rank = self.relative_rank(square);
        if rank == 7 {
            return None;
        }
        Some(self.square(square.file(), Rank::index(rank + 1)))
    }

    /// True if `a` is strictly closer to promotion than `b`.
    #[inline(always)]
    pub fn is_ahead_of(self, a: Square, b: Square) -> bool {
        self.relative_rank(a) > self.relative_rank(b)
    }

    /// Ranks left for a pawn on `square` to reach promotion.
    #[inline(always)]
    pub fn promotion_distance(self, square: Square) -> i16 {
        7 - self.relative_rank(square) as i16
    }

    /// All 64 squares, from our back rank toward the enemy's.
    #[inline(always)]
    pub fn advancing_squares(self) -> impl Iterator<Item = Square> {
        let us = self.us;
        Rank::ALL.into_iter().flat_map(move |rank| {
            File::ALL
                .into_iter()
                .map(move |file| Square::new(file, rank.relative_to(us)))
        })
    }
}
