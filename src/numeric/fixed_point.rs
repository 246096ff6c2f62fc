// ============================================================================
// Fixed-Point Q64.61
// Signed fixed-point representation with 64 integer and 61 fractional bits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use primitive_types::U256;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional bits.
pub const FRACTIONAL_BITS: u32 = 61;

/// Number of integer bits (the magnitude budget).
pub const INTEGER_BITS: u32 = 64;

/// Largest scale `rust_decimal` accepts.
const MAX_DECIMAL_DIGITS: u32 = 28;

/// Decimal digits needed to print 2^-61 without loss in the leading digits.
const DECIMAL_FRACTION_DIGITS: u32 = 19;

/// Q64.61 fixed-point number.
///
/// Internally stores `value × 2^61` as an i128. The magnitude budget is
/// `|value| < 2^64`, so the raw value always satisfies `|raw| < 2^125`
/// and the range is symmetric: negation never overflows.
///
/// # Value Range
/// - Minimum: -(2^64 - 2^-61)
/// - Maximum: +(2^64 - 2^-61)
/// - Precision: 2^-61 (~4.3e-19)
///
/// # Example
/// ```
/// use math64x61::numeric::FixedPoint;
///
/// let x = FixedPoint::from_integer(256).unwrap();
/// let y = x.checked_mul(x).unwrap();
/// assert_eq!(y, FixedPoint::from_integer(65536).unwrap());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i128", into = "i128")
)]
#[repr(transparent)]
pub struct FixedPoint(i128);

impl FixedPoint {
    /// The scale factor (2^61)
    pub const SCALE: i128 = 1 << FRACTIONAL_BITS;

    /// Exclusive bound on the raw magnitude (2^125)
    pub const BOUND: i128 = 1 << (INTEGER_BITS + FRACTIONAL_BITS);

    pub(crate) const FRACTION_MASK: i128 = Self::SCALE - 1;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(Self::SCALE);

    /// Maximum representable value
    pub const MAX: Self = Self(Self::BOUND - 1);

    /// Minimum representable value
    pub const MIN: Self = Self(-(Self::BOUND - 1));

    /// Smallest positive value (2^-61)
    pub const EPSILON: Self = Self(1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw scaled value.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `|raw| >= 2^125`.
    #[inline]
    pub const fn from_raw(raw: i128) -> NumericResult<Self> {
        if raw <= -Self::BOUND || raw >= Self::BOUND {
            Err(NumericError::OutOfRange)
        } else {
            Ok(Self(raw))
        }
    }

    #[inline]
    pub(crate) const fn from_raw_unchecked(raw: i128) -> Self {
        Self(raw)
    }

    /// Rebuild a value from an unsigned wide magnitude and a sign, reporting
    /// `error` when the magnitude is past the budget.
    #[inline]
    pub(crate) fn from_magnitude(
        magnitude: U256,
        negative: bool,
        error: NumericError,
    ) -> NumericResult<Self> {
        if magnitude >= U256::from(Self::BOUND as u128) {
            return Err(error);
        }
        let raw = magnitude.low_u128() as i128;
        Ok(Self(if negative { -raw } else { raw }))
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `|value| >= 2^64`.
    #[inline]
    pub fn from_integer(value: i128) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::OutOfRange)
            .and_then(Self::from_raw)
    }

    /// Create from the rational `numerator / denominator`.
    ///
    /// Digits beyond 2^-61 are truncated toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `OutOfRange` if the magnitude is 2^64 or more
    pub fn from_ratio(numerator: i128, denominator: i128) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let negative = (numerator < 0) != (denominator < 0);
        let scaled = U256::from(numerator.unsigned_abs()) << FRACTIONAL_BITS;
        let quotient = scaled / U256::from(denominator.unsigned_abs());

        Self::from_magnitude(quotient, negative, NumericError::OutOfRange)
    }

    /// Convert from rust_decimal::Decimal (truncating below 2^-61).
    ///
    /// # Errors
    /// Returns `OutOfRange` if the magnitude is 2^64 or more.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        Self::from_ratio(value.mantissa(), 10i128.pow(value.scale()))
    }

    /// Convert from an f64 (truncating below 2^-61).
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinities
    /// - `OutOfRange` if the magnitude is 2^64 or more
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        let scaled = value * Self::SCALE as f64;
        if scaled.abs() >= Self::BOUND as f64 {
            return Err(NumericError::OutOfRange);
        }

        Ok(Self(scaled as i128))
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Get the raw internal value (`value × 2^61`).
    #[inline]
    pub const fn raw_value(self) -> i128 {
        self.0
    }

    /// Exact value as a reduced fraction `(numerator, denominator)`.
    ///
    /// The denominator is always a power of two no larger than 2^61.
    pub fn to_ratio(self) -> (i128, i128) {
        if self.0 == 0 {
            return (0, 1);
        }

        let shift = self.0.trailing_zeros().min(FRACTIONAL_BITS);
        (self.0 >> shift, 1 << (FRACTIONAL_BITS - shift))
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Keeps as many fractional digits as fit in 28 significant digits
    /// (at most 19), truncating the rest.
    pub fn to_decimal(self) -> Decimal {
        let integer = self.integer_part();
        let fraction = self.0 - integer * Self::SCALE;

        let integer_digits = integer.unsigned_abs().checked_ilog10().map_or(1, |d| d + 1);
        let scale = MAX_DECIMAL_DIGITS
            .saturating_sub(integer_digits)
            .min(DECIMAL_FRACTION_DIGITS);
        let unit = 10i128.pow(scale);

        let mantissa = integer * unit + (fraction * unit) / Self::SCALE;
        Decimal::from_i128_with_scale(mantissa, scale)
    }

    /// Approximate conversion to f64.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i128 {
        self.0 / Self::SCALE
    }

    /// Get the fractional bits of the magnitude.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs() as u64
    }

    #[inline]
    pub(crate) const fn magnitude(self) -> u128 {
        self.0.unsigned_abs()
    }

    #[inline]
    pub(crate) fn wide_magnitude(self) -> U256 {
        U256::from(self.magnitude())
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    ///
    /// This is the sign test every signed operation branches on.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Check if value has no fractional bits.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.0 & Self::FRACTION_MASK == 0
    }

    /// Get absolute value. Never fails: the range is symmetric.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Largest integer value not greater than `self`.
    ///
    /// # Errors
    /// Returns `Overflow` when the result leaves the range (below `MIN`).
    pub fn floor(self) -> NumericResult<Self> {
        Self::from_raw(self.0 & !Self::FRACTION_MASK).map_err(|_| NumericError::Overflow)
    }

    /// Smallest integer value not less than `self`.
    ///
    /// # Errors
    /// Returns `Overflow` when the result leaves the range (above `MAX`).
    pub fn ceil(self) -> NumericResult<Self> {
        Self::from_raw((self.0 + Self::FRACTION_MASK) & !Self::FRACTION_MASK)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for FixedPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for FixedPoint {
    /// Every i64 fits in the 64-bit integer budget.
    #[inline]
    fn from(value: i64) -> Self {
        Self(value as i128 * Self::SCALE)
    }
}

impl TryFrom<i128> for FixedPoint {
    type Error = NumericError;

    #[inline]
    fn try_from(raw: i128) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<FixedPoint> for i128 {
    #[inline]
    fn from(value: FixedPoint) -> Self {
        value.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint({}, raw={})", self, self.0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FixedPoint {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "64" -> 64
    /// - "-5.5" -> -5.5
    /// - "72.11" -> 72.11 truncated to 61 fractional bits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let value = Decimal::from_str(s).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
