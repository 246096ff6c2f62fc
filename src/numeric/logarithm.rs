// ============================================================================
// Logarithm Module
// Binary logarithm by MSB extraction and square-and-compare refinement
// ============================================================================

use super::constants::{LN_2, LOG10_2};
use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedPoint, FRACTIONAL_BITS};

impl FixedPoint {
    /// Binary logarithm `log2(self)`.
    ///
    /// The integer part is the position of the most significant bit minus
    /// 61. The remaining mantissa `y` in [1, 2) is squared 61 times; each
    /// time `y^2 >= 2` the matching fractional bit is set and `y` is halved.
    ///
    /// # Errors
    /// Returns `DomainError` for zero or negative input.
    pub fn checked_log2(self) -> NumericResult<Self> {
        if !self.is_positive() {
            return Err(NumericError::DomainError);
        }

        let raw = self.magnitude();
        let msb = u128::BITS - 1 - raw.leading_zeros();
        let integer = msb as i128 - FRACTIONAL_BITS as i128;

        let one = FixedPoint::SCALE as u128;
        let two = one << 1;
        let mut y = if msb >= FRACTIONAL_BITS {
            raw >> (msb - FRACTIONAL_BITS)
        } else {
            raw << (FRACTIONAL_BITS - msb)
        };

        let mut fraction: i128 = 0;
        let mut delta: i128 = FixedPoint::SCALE >> 1;
        while delta > 0 {
            // y < 2^62, so y^2 fits
            y = (y * y) >> FRACTIONAL_BITS;
            if y >= two {
                fraction += delta;
                y >>= 1;
            }
            delta >>= 1;
        }

        Ok(Self::from_raw_unchecked((integer << FRACTIONAL_BITS) + fraction))
    }

    /// Natural logarithm, `log2(self) · ln(2)`.
    ///
    /// # Errors
    /// Returns `DomainError` for zero or negative input.
    pub fn checked_ln(self) -> NumericResult<Self> {
        self.checked_log2()?.checked_mul(LN_2)
    }

    /// Base-10 logarithm, `log2(self) · log10(2)`.
    ///
    /// # Errors
    /// Returns `DomainError` for zero or negative input.
    pub fn checked_log10(self) -> NumericResult<Self> {
        self.checked_log2()?.checked_mul(LOG10_2)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(value: i64) -> FixedPoint {
        FixedPoint::from(value)
    }

    #[test]
    fn test_log2_powers_of_two_are_exact() {
        assert_eq!(FixedPoint::ONE.checked_log2().unwrap(), FixedPoint::ZERO);
        assert_eq!(fp(2).checked_log2().unwrap(), FixedPoint::ONE);
        assert_eq!(fp(1024).checked_log2().unwrap(), fp(10));
        assert_eq!(
            FixedPoint::from_ratio(1, 2).unwrap().checked_log2().unwrap(),
            fp(-1)
        );
        assert_eq!(FixedPoint::EPSILON.checked_log2().unwrap(), fp(-61));
    }

    #[test]
    fn test_log2_approximate() {
        let x = FixedPoint::from_ratio(3, 4).unwrap();
        assert!((x.checked_log2().unwrap().to_f64() - 0.75f64.log2()).abs() < 1e-15);

        let y = fp(5).checked_log2().unwrap();
        assert!((y.to_f64() - 5f64.log2()).abs() < 1e-15);
    }

    #[test]
    fn test_log2_max() {
        let result = FixedPoint::MAX.checked_log2().unwrap();
        assert!((result.to_f64() - 64.0).abs() < 1e-15);
        assert!(result < fp(64));
    }

    #[test]
    fn test_ln() {
        assert_eq!(FixedPoint::ONE.checked_ln().unwrap(), FixedPoint::ZERO);

        let e = FixedPoint::from_f64(std::f64::consts::E).unwrap();
        assert!((e.checked_ln().unwrap().to_f64() - 1.0).abs() < 1e-15);

        let half = FixedPoint::from_ratio(1, 2).unwrap();
        let ln_half = half.checked_ln().unwrap();
        assert!(ln_half.is_negative());
        assert!((ln_half.to_f64() + std::f64::consts::LN_2).abs() < 1e-15);
    }

    #[test]
    fn test_log10() {
        let ten = fp(10).checked_log10().unwrap();
        assert!((ten.to_f64() - 1.0).abs() < 1e-15);

        let x = fp(1000).checked_log10().unwrap();
        assert!((x.to_f64() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_log_domain() {
        for value in [FixedPoint::ZERO, fp(-1), FixedPoint::MIN] {
            assert_eq!(value.checked_log2(), Err(NumericError::DomainError));
            assert_eq!(value.checked_ln(), Err(NumericError::DomainError));
            assert_eq!(value.checked_log10(), Err(NumericError::DomainError));
        }
    }
}
