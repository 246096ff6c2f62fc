// ============================================================================
// Power Module
// Integer and fixed-point exponents via binary exponentiation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::FixedPoint;

impl FixedPoint {
    /// Raise to an integer power.
    ///
    /// - `x^0 = 1` for every `x`, including zero
    /// - negative exponents compute `1 / x^|n|`
    /// - negative bases alternate sign with the exponent's parity
    ///
    /// # Errors
    /// - `Overflow` if any intermediate product leaves the range, or if the
    ///   positive power truncates to zero so its reciprocal cannot be held
    /// - `DivisionByZero` for a zero base with a negative exponent
    pub fn checked_pow(self, exponent: i64) -> NumericResult<Self> {
        if exponent >= 0 {
            return self.pow_unsigned(exponent.unsigned_abs());
        }

        if self.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let denominator = self.pow_unsigned(exponent.unsigned_abs())?;
        if denominator.is_zero() {
            return Err(NumericError::Overflow);
        }

        Self::ONE.checked_div(denominator)
    }

    fn pow_unsigned(self, mut exponent: u64) -> NumericResult<Self> {
        let mut result = Self::ONE;
        let mut base = self;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.checked_mul(base)?;
            }
            exponent >>= 1;
            // Skip the final squaring: it is never used and may overflow.
            if exponent > 0 {
                base = base.checked_mul(base)?;
            }
        }

        Ok(result)
    }

    /// Raise to a fixed-point power.
    ///
    /// Integer-valued exponents that fit in an i64 go through
    /// [`checked_pow`](Self::checked_pow). Otherwise the result is
    /// `2^(exponent · log2(self))`, which needs a positive base.
    ///
    /// # Errors
    /// - `DomainError` for a negative base with a non-integer exponent
    /// - `DivisionByZero` for a zero base with a negative exponent
    /// - `Overflow` if the result leaves the range
    pub fn checked_powf(self, exponent: Self) -> NumericResult<Self> {
        if exponent.is_integer() {
            if let Ok(n) = i64::try_from(exponent.integer_part()) {
                return self.checked_pow(n);
            }
        }

        if self.is_negative() {
            return Err(NumericError::DomainError);
        }

        if self.is_zero() {
            return if exponent.is_negative() {
                Err(NumericError::DivisionByZero)
            } else {
                Ok(Self::ZERO)
            };
        }

        exponent.checked_mul(self.checked_log2()?)?.checked_exp2()
    }
}

// ============================================================================
// Tests
// ============================================================================
