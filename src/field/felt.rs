// ============================================================================
// Field Element
// Canonical elements of the StarkNet prime field and the modular-complement
// encoding of signed Q64.61 values
// ============================================================================

use crate::numeric::{FixedPoint, NumericError, NumericResult};
use primitive_types::U256;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The field prime `P = 2^251 + 17 · 2^192 + 1` (little-endian limbs).
pub const PRIME: U256 = U256([1, 0, 0, 0x0800_0000_0000_0011]);

/// `floor(P / 2)`; elements above it encode negative values.
pub const HALF_PRIME: U256 = U256([0, 0, 0x8000_0000_0000_0000, 0x0400_0000_0000_0008]);

/// A canonical field element, `0 <= value < P`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Felt(U256);

impl Felt {
    /// The additive identity (zero).
    pub const ZERO: Felt = Felt(U256([0, 0, 0, 0]));

    /// Create a field element, rejecting non-canonical values.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `value >= P`.
    pub fn new(value: U256) -> NumericResult<Self> {
        if value >= PRIME {
            return Err(NumericError::OutOfRange);
        }
        Ok(Self(value))
    }

    /// Parse a decimal string.
    pub fn from_dec_str(s: &str) -> NumericResult<Self> {
        let value = U256::from_dec_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::new(value)
    }

    /// Parse a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> NumericResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let value = U256::from_str_radix(digits, 16).map_err(|_| NumericError::InvalidInput)?;
        Self::new(value)
    }

    /// Get the underlying integer.
    #[inline]
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Whether this element lies in the upper half of the field, i.e.
    /// encodes a negative value.
    #[inline]
    pub fn is_upper_half(&self) -> bool {
        self.0 > HALF_PRIME
    }
}

impl Neg for Felt {
    type Output = Self;

    /// Additive inverse, `P - value` (zero maps to zero).
    fn neg(self) -> Self::Output {
        if self.0.is_zero() {
            self
        } else {
            Self(PRIME - self.0)
        }
    }
}

// ============================================================================
// Fixed-Point Encoding
// ============================================================================

impl FixedPoint {
    /// Encode as a field element: non-negative values map to their raw
    /// value, negative values to `P - |raw|`.
    pub fn to_felt(self) -> Felt {
        let magnitude = self.wide_magnitude();
        if self.is_negative() {
            Felt(PRIME - magnitude)
        } else {
            Felt(magnitude)
        }
    }

    /// Decode a field element produced by [`to_felt`](Self::to_felt).
    ///
    /// # Errors
    /// Returns `OutOfRange` if the element's signed magnitude is 2^64 or
    /// more.
    pub fn from_felt(felt: Felt) -> NumericResult<Self> {
        if felt.is_upper_half() {
            Self::from_magnitude(PRIME - felt.0, true, NumericError::OutOfRange)
        } else {
            Self::from_magnitude(felt.0, false, NumericError::OutOfRange)
        }
    }
}

impl From<FixedPoint> for Felt {
    #[inline]
    fn from(value: FixedPoint) -> Self {
        value.to_felt()
    }
}

impl TryFrom<Felt> for FixedPoint {
    type Error = NumericError;

    #[inline]
    fn try_from(felt: Felt) -> Result<Self, Self::Error> {
        Self::from_felt(felt)
    }
}

// ============================================================================
// Display, Debug and Parsing
// ============================================================================

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({:#x})", self.0)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for Felt {
    type Err = NumericError;

    /// Parse `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("0x") {
            Self::from_hex(s)
        } else {
            Self::from_dec_str(s)
        }
    }
}

impl TryFrom<String> for Felt {
    type Error = NumericError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Felt> for String {
    fn from(felt: Felt) -> Self {
        felt.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
