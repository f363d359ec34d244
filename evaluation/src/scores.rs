// Score granularity for the search.
//
// Coarse scores make MTD(f)-style searches converge faster: positions that
// differ by less than one grain compare equal and produce earlier cutoffs.

/// Number of low bits cleared from every evaluation (multiples of 8).
pub const DEFAULT_GRAIN: u32 = 3;

/// Clears the low `grain` bits of `score`.
///
/// The shift is arithmetic, so negative scores round toward negative
/// infinity: `-1` becomes `-8`, `7` becomes `0`.
#[inline(always)]
pub fn quantize(score: i16, grain: u32) -> i16 {
    (score >> grain) << grain
}
