// ============================================================================
// Numeric Module
// Q64.61 fixed-point arithmetic with checked overflow
// ============================================================================
//
// This module provides:
// - FixedPoint: signed Q64.61 value (64 integer bits, 61 fractional bits)
// - Arithmetic core: checked add/sub/mul/div
// - Power, root, exponential and logarithm operations
// - NumericError: Error types for every operation
// - Tolerance: comparator configuration for approximate results
//
// Design principles:
// - No floating-point operations in any computation
// - All arithmetic returns Result (no panics, no wrapping, no clamping)
// - Native i128 representation; 256-bit intermediates for products
// - Transcendental functions run a fixed number of integer steps

mod arithmetic;
mod errors;
mod exponential;
mod fixed_point;
mod logarithm;
mod power;
mod root;
mod tolerance;

pub mod constants;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{FixedPoint, FRACTIONAL_BITS, INTEGER_BITS};
pub use tolerance::Tolerance;
