// ============================================================================
// Math64x61 Library
// Deterministic Q64.61 fixed-point arithmetic with a field-element encoding
// ============================================================================

//! # Math64x61
//!
//! Signed fixed-point numbers with 64 integer bits and 61 fractional bits,
//! computed with integer arithmetic only.
//!
//! ## Features
//!
//! - **Checked arithmetic**: every operation returns a `Result`, nothing wraps
//! - **Transcendentals** (`sqrt`, `exp2`, `exp`, `log2`, `ln`, `log10`, `powf`)
//!   with a fixed number of integer steps
//! - **Field encoding** of signed values as StarkNet field elements
//! - **One interface** ([`interfaces::FixedMath`]) over both encodings
//!
//! ## Example
//!
//! ```rust
//! use math64x61::prelude::*;
//!
//! let x = FixedPoint::from_ratio(3, 2).unwrap();
//! let y = FixedPoint::from_integer(4).unwrap();
//!
//! assert_eq!(x.checked_mul(y).unwrap(), FixedPoint::from_integer(6).unwrap());
//! assert_eq!(y.checked_sqrt().unwrap(), FixedPoint::from_integer(2).unwrap());
//!
//! // Same computation on field elements
//! let math = FieldMath;
//! let a = math.encode(-3, 2).unwrap();
//! let b = math.encode(4, 1).unwrap();
//! let product = math.mul(a, b).unwrap();
//! assert!(product.is_upper_half());
//! assert_eq!(math.decode(product).unwrap(), (-6, 1));
//! ```

pub mod field;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::field::{Felt, PRIME};
    pub use crate::interfaces::{FieldMath, FixedMath, NativeMath};
    pub use crate::numeric::constants::{E, LN_2, LOG10_2, LOG2_E};
    pub use crate::numeric::{FixedPoint, NumericError, NumericResult, Tolerance};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_compound_interest() {
        // 1000 · e^(0.05 · 10)
        let principal = FixedPoint::from_integer(1000).unwrap();
        let rate = FixedPoint::from_ratio(5, 100).unwrap();
        let years = FixedPoint::from_integer(10).unwrap();

        let growth = rate.checked_mul(years).unwrap().checked_exp().unwrap();
        let amount = principal.checked_mul(growth).unwrap();

        let expected = FixedPoint::from_f64(1000.0 * 0.5f64.exp()).unwrap();
        assert!(Tolerance::transcendental().is_close(amount, expected));
    }

    #[test]
    fn test_backends_agree() {
        let native = NativeMath;
        let field = FieldMath;

        let a = native.encode(-7, 4).unwrap();
        let b = native.encode(9, 8).unwrap();
        let native_result = native.div(native.sub(a, b).unwrap(), b).unwrap();

        let fa = field.encode(-7, 4).unwrap();
        let fb = field.encode(9, 8).unwrap();
        let field_result = field.div(field.sub(fa, fb).unwrap(), fb).unwrap();

        assert_eq!(field_result, native_result.to_felt());
        assert_eq!(FixedPoint::from_felt(field_result).unwrap(), native_result);
    }

    #[test]
    fn test_log_exp_inverse() {
        let x = FixedPoint::from_ratio(37, 10).unwrap();
        let back = x.checked_ln().unwrap().checked_exp().unwrap();
        assert!(Tolerance::transcendental().is_close(back, x));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let value = FixedPoint::from_ratio(-7, 4).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, value.raw_value().to_string());
        assert_eq!(serde_json::from_str::<FixedPoint>(&json).unwrap(), value);

        // Out-of-range raw values are rejected on the way in
        let too_big = (1i128 << 125).to_string();
        assert!(serde_json::from_str::<FixedPoint>(&too_big).is_err());

        let felt = value.to_felt();
        let json = serde_json::to_string(&felt).unwrap();
        assert_eq!(json, format!("\"{}\"", felt));
        assert_eq!(serde_json::from_str::<Felt>(&json).unwrap(), felt);

        let tolerance = Tolerance::transcendental();
        let json = serde_json::to_string(&tolerance).unwrap();
        assert_eq!(serde_json::from_str::<Tolerance>(&json).unwrap(), tolerance);
    }
}
