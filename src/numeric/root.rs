// ============================================================================
// Root Module
// Square root by integer Newton iteration on the scaled radicand
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedPoint, FRACTIONAL_BITS};
use primitive_types::U256;

impl FixedPoint {
    /// Square root, truncated to 61 fractional bits.
    ///
    /// `sqrt(raw / 2^61) · 2^61 = sqrt(raw · 2^61)`, so the result is the
    /// integer square root of the radicand shifted up by 61 bits. Exact for
    /// perfect squares.
    ///
    /// # Errors
    /// Returns `DomainError` for zero or negative input.
    pub fn checked_sqrt(self) -> NumericResult<Self> {
        if !self.is_positive() {
            return Err(NumericError::DomainError);
        }

        let root = integer_sqrt(self.wide_magnitude() << FRACTIONAL_BITS);
        // radicand < 2^186, so the root is below 2^93
        Ok(Self::from_raw_unchecked(root.low_u128() as i128))
    }
}

/// floor(sqrt(n)) by Newton's method, starting above the root.
fn integer_sqrt(n: U256) -> U256 {
    if n.is_zero() {
        return n;
    }

    let mut x = U256::one() << n.bits().div_ceil(2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}

// ============================================================================
// Tests
// ============================================================================
