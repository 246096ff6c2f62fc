// ============================================================================
// Tolerance Configuration
// Comparator settings for approximate (transcendental) results
// ============================================================================

use super::fixed_point::FixedPoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closeness criterion for comparing an approximate result to an expected
/// value: `|actual - expected| <= max(absolute, relative · |expected|)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Largest accepted absolute difference
    pub absolute: FixedPoint,

    /// Largest accepted difference as a fraction of `|expected|`
    pub relative: FixedPoint,
}

impl Tolerance {
    /// Create a tolerance from absolute and relative bounds
    pub fn new(absolute: FixedPoint, relative: FixedPoint) -> Self {
        Self { absolute, relative }
    }

    /// Builder method: Set the absolute bound
    pub fn with_absolute(mut self, absolute: FixedPoint) -> Self {
        self.absolute = absolute;
        self
    }

    /// Builder method: Set the relative bound
    pub fn with_relative(mut self, relative: FixedPoint) -> Self {
        self.relative = relative;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.absolute.is_negative() {
            return Err("Absolute tolerance cannot be negative".to_string());
        }

        if self.relative.is_negative() {
            return Err("Relative tolerance cannot be negative".to_string());
        }

        if self.relative > FixedPoint::ONE {
            return Err("Relative tolerance cannot exceed 1".to_string());
        }

        Ok(())
    }

    /// Check whether `actual` is within tolerance of `expected`.
    pub fn is_close(&self, actual: FixedPoint, expected: FixedPoint) -> bool {
        let difference = match actual.checked_sub(expected) {
            Ok(difference) => difference.abs(),
            Err(_) => return false,
        };

        let scaled = self
            .relative
            .checked_mul(expected.abs())
            .unwrap_or(FixedPoint::ZERO);

        difference <= self.absolute.max(scaled)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl Tolerance {
    /// Bit-exact comparison
    pub fn exact() -> Self {
        Self::new(FixedPoint::ZERO, FixedPoint::ZERO)
    }

    /// Within `n` units in the last place (n × 2^-61)
    pub fn ulps(n: u32) -> Self {
        Self::new(FixedPoint::from_raw_unchecked(n as i128), FixedPoint::ZERO)
    }

    /// Transcendental results (sqrt, exp2, log2, ln, log10)
    /// - absolute: 2^-32 (~2.3e-10)
    /// - relative: 2^-40 (~9.1e-13)
    pub fn transcendental() -> Self {
        Self::new(
            FixedPoint::from_raw_unchecked(1 << 29),
            FixedPoint::from_raw_unchecked(1 << 21),
        )
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::transcendental()
    }
}
