// ============================================================================
// Mathematical Constants
// Q64.61 constants, rounded to nearest
// ============================================================================

use super::fixed_point::FixedPoint;

/// ln(2)
pub const LN_2: FixedPoint = FixedPoint::from_raw_unchecked(1_598_288_580_650_331_957);

/// log10(2)
pub const LOG10_2: FixedPoint = FixedPoint::from_raw_unchecked(694_127_911_065_419_642);

/// log2(e)
pub const LOG2_E: FixedPoint = FixedPoint::from_raw_unchecked(3_326_628_274_461_080_623);

/// Euler's number
pub const E: FixedPoint = FixedPoint::from_raw_unchecked(6_267_931_151_224_907_085);
