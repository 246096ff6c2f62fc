// ============================================================================
// Exponential Module
// Binary exponential by integer/fraction split and bit decomposition
// ============================================================================

use super::constants::LOG2_E;
use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedPoint, FRACTIONAL_BITS, INTEGER_BITS};
use primitive_types::U256;

/// `2^(2^-k)` in Q64.61 for k = 1..=61, rounded to nearest.
const EXP2_BIT_FACTORS: [u128; FRACTIONAL_BITS as usize] = [
    0x2d413cccfe779921, // 2^(2^-1)
    0x260dfc14636e2a5c, // 2^(2^-2)
    0x22e57078faa2f5ba, // 2^(2^-3)
    0x216ab0d9f3121ec5, // 2^(2^-4)
    0x20b361a62b0ae876, // 2^(2^-5)
    0x2059347cef00c1dd, // 2^(2^-6)
    0x202c7b53f6666adb, // 2^(2^-7)
    0x201635f4b5797dac, // 2^(2^-8)
    0x200b190db43813d4, // 2^(2^-9)
    0x20058c0bc5d19d8a, // 2^(2^-10)
    0x2002c5e72080a3f4, // 2^(2^-11)
    0x200162ebdffb8ed7, // 2^(2^-12)
    0x2000b17403f73f2e, // 2^(2^-13)
    0x200058b986fb5292, // 2^(2^-14)
    0x20002c5ca4bdc0a9, // 2^(2^-15)
    0x2000162e4aaeeb81, // 2^(2^-16)
    0x20000b17236b7936, // 2^(2^-17)
    0x2000058b913abd8e, // 2^(2^-18)
    0x200002c5c87e9f06, // 2^(2^-19)
    0x20000162e4379f93, // 2^(2^-20)
    0x200000b17219e3ce, // 2^(2^-21)
    0x20000058b90c76e8, // 2^(2^-22)
    0x2000002c5c861cb4, // 2^(2^-23)
    0x200000162e4306aa, // 2^(2^-24)
    0x2000000b17218169, // 2^(2^-25)
    0x200000058b90c03a, // 2^(2^-26)
    0x20000002c5c85ffe, // 2^(2^-27)
    0x2000000162e42ff7, // 2^(2^-28)
    0x20000000b17217fa, // 2^(2^-29)
    0x2000000058b90bfc, // 2^(2^-30)
    0x200000002c5c85fe, // 2^(2^-31)
    0x20000000162e42ff, // 2^(2^-32)
    0x200000000b17217f, // 2^(2^-33)
    0x20000000058b90c0, // 2^(2^-34)
    0x2000000002c5c860, // 2^(2^-35)
    0x200000000162e430, // 2^(2^-36)
    0x2000000000b17218, // 2^(2^-37)
    0x200000000058b90c, // 2^(2^-38)
    0x20000000002c5c86, // 2^(2^-39)
    0x2000000000162e43, // 2^(2^-40)
    0x20000000000b1721, // 2^(2^-41)
    0x2000000000058b91, // 2^(2^-42)
    0x200000000002c5c8, // 2^(2^-43)
    0x20000000000162e4, // 2^(2^-44)
    0x200000000000b172, // 2^(2^-45)
    0x20000000000058b9, // 2^(2^-46)
    0x2000000000002c5d, // 2^(2^-47)
    0x200000000000162e, // 2^(2^-48)
    0x2000000000000b17, // 2^(2^-49)
    0x200000000000058c, // 2^(2^-50)
    0x20000000000002c6, // 2^(2^-51)
    0x2000000000000163, // 2^(2^-52)
    0x20000000000000b1, // 2^(2^-53)
    0x2000000000000059, // 2^(2^-54)
    0x200000000000002c, // 2^(2^-55)
    0x2000000000000016, // 2^(2^-56)
    0x200000000000000b, // 2^(2^-57)
    0x2000000000000006, // 2^(2^-58)
    0x2000000000000003, // 2^(2^-59)
    0x2000000000000001, // 2^(2^-60)
    0x2000000000000001, // 2^(2^-61)
];

impl FixedPoint {
    /// Binary exponential `2^self`.
    ///
    /// With `self = i + f`, `i = floor(self)` and `f` in [0, 1): `2^f` is the
    /// product of `2^(2^-k)` over the set bits of `f`, then shifted by `i`.
    /// Large negative inputs underflow to zero.
    ///
    /// # Errors
    /// Returns `Overflow` if `self >= 64`.
    pub fn checked_exp2(self) -> NumericResult<Self> {
        let raw = self.raw_value();
        let integer = raw >> FRACTIONAL_BITS;
        let fraction = (raw & Self::FRACTION_MASK) as u64;

        if integer >= INTEGER_BITS as i128 {
            return Err(NumericError::Overflow);
        }

        let mantissa = exp2_fraction(fraction);
        let magnitude = if integer >= 0 {
            // mantissa < 2^62 and integer <= 63, so this stays within 256 bits
            U256::from(mantissa) << (integer as u32)
        } else {
            let shift = u32::try_from(-integer).unwrap_or(u32::MAX);
            U256::from(mantissa.checked_shr(shift).unwrap_or(0))
        };

        Self::from_magnitude(magnitude, false, NumericError::Overflow)
    }

    /// Natural exponential `e^self`, computed as `2^(self · log2(e))`.
    ///
    /// # Errors
    /// Returns `Overflow` if the result leaves the range.
    pub fn checked_exp(self) -> NumericResult<Self> {
        self.checked_mul(LOG2_E)?.checked_exp2()
    }
}

/// `2^(fraction / 2^61)` in Q64.61; the result lies in [2^61, 2^62).
fn exp2_fraction(fraction: u64) -> u128 {
    let mut result = FixedPoint::SCALE as u128;

    for (index, factor) in EXP2_BIT_FACTORS.iter().enumerate() {
        let bit = FRACTIONAL_BITS - 1 - index as u32;
        if (fraction >> bit) & 1 == 1 {
            // Both operands are below 2^62
            result = (result * factor) >> FRACTIONAL_BITS;
        }
    }

    result
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
    fn test_exp2_integers_are_exact() {
        assert_eq!(FixedPoint::ZERO.checked_exp2().unwrap(), FixedPoint::ONE);
        assert_eq!(fp(1).checked_exp2().unwrap(), fp(2));
        assert_eq!(fp(3).checked_exp2().unwrap(), fp(8));
        assert_eq!(
            fp(-1).checked_exp2().unwrap(),
            FixedPoint::from_ratio(1, 2).unwrap()
        );
        assert_eq!(
            fp(63).checked_exp2().unwrap(),
            FixedPoint::from_integer(1 << 63).unwrap()
        );
    }

    #[test]
    fn test_exp2_fractions() {
        let half = FixedPoint::from_ratio(1, 2).unwrap();
        let root_two = half.checked_exp2().unwrap();
        assert!((root_two.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-15);

        let x = FixedPoint::from_ratio(11, 2).unwrap();
        assert!((x.checked_exp2().unwrap().to_f64() - 2f64.powf(5.5)).abs() < 1e-12);

        let y = FixedPoint::from_ratio(-11, 2).unwrap();
        assert!((y.checked_exp2().unwrap().to_f64() - 2f64.powf(-5.5)).abs() < 1e-15);
    }

    #[test]
    fn test_exp2_fraction_table_endpoints() {
        assert_eq!(exp2_fraction(0), FixedPoint::SCALE as u128);
        let almost_one = exp2_fraction((1 << 61) - 1);
        assert!(almost_one < 2 * FixedPoint::SCALE as u128);
        assert!(almost_one > 2 * FixedPoint::SCALE as u128 - 256);
    }

    #[test]
    fn test_exp2_overflow_and_underflow() {
        assert_eq!(fp(64).checked_exp2(), Err(NumericError::Overflow));
        assert_eq!(FixedPoint::MAX.checked_exp2(), Err(NumericError::Overflow));
        assert_eq!(fp(-62).checked_exp2().unwrap(), FixedPoint::ZERO);
        assert_eq!(FixedPoint::MIN.checked_exp2().unwrap(), FixedPoint::ZERO);
    }

    #[test]
    fn test_exp() {
        assert_eq!(FixedPoint::ZERO.checked_exp().unwrap(), FixedPoint::ONE);

        let e = FixedPoint::ONE.checked_exp().unwrap();
        assert!((e.to_f64() - std::f64::consts::E).abs() < 1e-15);

        let x = fp(-3).checked_exp().unwrap();
        assert!((x.to_f64() - (-3f64).exp()).abs() < 1e-15);
    }
}
