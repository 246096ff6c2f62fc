// ============================================================================
// Fixed-Point Math Interface
// One operation surface over native values and field-encoded values
// ============================================================================

use crate::field::Felt;
use crate::numeric::{FixedPoint, NumericResult};
use std::fmt::Debug;

/// Uniform numeric interface over a value encoding.
///
/// Implementations only describe how their `Value` maps to and from
/// [`FixedPoint`]; every operation is provided on top of that.
/// Failed operations are logged at debug level with the backend name.
pub trait FixedMath: Send + Sync {
    /// Encoded value type exchanged with callers
    type Value: Copy + Debug;

    /// Backend name for logging
    fn name(&self) -> &str;

    /// Decode a caller value into a native fixed-point value
    fn lift(&self, value: Self::Value) -> NumericResult<FixedPoint>;

    /// Encode a native fixed-point value for the caller
    fn lower(&self, value: FixedPoint) -> Self::Value;

    /// Encode the rational `numerator / denominator`
    fn encode(&self, numerator: i128, denominator: i128) -> NumericResult<Self::Value> {
        let result = FixedPoint::from_ratio(numerator, denominator).map(|v| self.lower(v));
        self.trace("encode", result)
    }

    /// Decode to the exact reduced fraction `(numerator, denominator)`
    fn decode(&self, value: Self::Value) -> NumericResult<(i128, i128)> {
        let result = self.lift(value).map(FixedPoint::to_ratio);
        self.trace("decode", result)
    }

    fn add(&self, a: Self::Value, b: Self::Value) -> NumericResult<Self::Value> {
        self.binary("add", a, b, FixedPoint::checked_add)
    }

    fn sub(&self, a: Self::Value, b: Self::Value) -> NumericResult<Self::Value> {
        self.binary("sub", a, b, FixedPoint::checked_sub)
    }

    fn mul(&self, a: Self::Value, b: Self::Value) -> NumericResult<Self::Value> {
        self.binary("mul", a, b, FixedPoint::checked_mul)
    }

    fn div(&self, a: Self::Value, b: Self::Value) -> NumericResult<Self::Value> {
        self.binary("div", a, b, FixedPoint::checked_div)
    }

    fn pow(&self, base: Self::Value, exponent: i64) -> NumericResult<Self::Value> {
        self.unary("pow", base, |v| v.checked_pow(exponent))
    }

    fn powf(&self, base: Self::Value, exponent: Self::Value) -> NumericResult<Self::Value> {
        self.binary("powf", base, exponent, FixedPoint::checked_powf)
    }

    fn sqrt(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("sqrt", value, FixedPoint::checked_sqrt)
    }

    fn exp2(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("exp2", value, FixedPoint::checked_exp2)
    }

    fn exp(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("exp", value, FixedPoint::checked_exp)
    }

    fn log2(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("log2", value, FixedPoint::checked_log2)
    }

    fn ln(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("ln", value, FixedPoint::checked_ln)
    }

    fn log10(&self, value: Self::Value) -> NumericResult<Self::Value> {
        self.unary("log10", value, FixedPoint::checked_log10)
    }

    #[doc(hidden)]
    fn unary<F>(&self, op: &'static str, value: Self::Value, f: F) -> NumericResult<Self::Value>
    where
        F: FnOnce(FixedPoint) -> NumericResult<FixedPoint>,
    {
        let result = self.lift(value).and_then(f).map(|v| self.lower(v));
        self.trace(op, result)
    }

    #[doc(hidden)]
    fn binary<F>(
        &self,
        op: &'static str,
        a: Self::Value,
        b: Self::Value,
        f: F,
    ) -> NumericResult<Self::Value>
    where
        F: FnOnce(FixedPoint, FixedPoint) -> NumericResult<FixedPoint>,
    {
        let result = self
            .lift(a)
            .and_then(|a| Ok((a, self.lift(b)?)))
            .and_then(|(a, b)| f(a, b))
            .map(|v| self.lower(v));
        self.trace(op, result)
    }

    #[doc(hidden)]
    fn trace<T>(&self, op: &'static str, result: NumericResult<T>) -> NumericResult<T> {
        if let Err(error) = &result {
            tracing::debug!(backend = self.name(), op, %error, "fixed-point operation failed");
        }
        result
    }
}

/// Operates directly on [`FixedPoint`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMath;

impl FixedMath for NativeMath {
    type Value = FixedPoint;

    fn name(&self) -> &str {
        "native"
    }

    #[inline]
    fn lift(&self, value: FixedPoint) -> NumericResult<FixedPoint> {
        Ok(value)
    }

    #[inline]
    fn lower(&self, value: FixedPoint) -> FixedPoint {
        value
    }
}

/// Operates on field elements, negatives carried as `P - |raw|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMath;

impl FixedMath for FieldMath {
    type Value = Felt;

    fn name(&self) -> &str {
        "field"
    }

    #[inline]
    fn lift(&self, value: Felt) -> NumericResult<FixedPoint> {
        FixedPoint::from_felt(value)
    }

    #[inline]
    fn lower(&self, value: FixedPoint) -> Felt {
        value.to_felt()
    }
}
