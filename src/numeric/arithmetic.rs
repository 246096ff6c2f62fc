// ============================================================================
// Arithmetic Core
// Checked add/sub/mul/div over Q64.61 values
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedPoint, FRACTIONAL_BITS};

impl FixedPoint {
    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude reaches 2^64.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        // Both operands are below 2^125, so the i128 sum cannot wrap.
        Self::from_raw(self.raw_value() + rhs.raw_value()).map_err(|_| NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude reaches 2^64.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Self::from_raw(self.raw_value() - rhs.raw_value()).map_err(|_| NumericError::Overflow)
    }

    /// Checked multiplication, truncating toward zero.
    ///
    /// Multiplies the magnitudes in 256 bits, shifts out the 61 fractional
    /// bits and reattaches the sign. Integer-valued operands lose nothing.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude reaches 2^64.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let negative = self.is_negative() != rhs.is_negative();
        let product = self.wide_magnitude() * rhs.wide_magnitude();

        Self::from_magnitude(product >> FRACTIONAL_BITS, negative, NumericError::Overflow)
    }

    /// Checked division, truncating toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient's magnitude reaches 2^64
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let negative = self.is_negative() != rhs.is_negative();
        let quotient = (self.wide_magnitude() << FRACTIONAL_BITS) / rhs.wide_magnitude();

        Self::from_magnitude(quotient, negative, NumericError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
