// ============================================================================
// Basic Usage Example
// ============================================================================

use math64x61::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Math64x61 Example ===\n");

    let x = FixedPoint::from_ratio(3, 2).unwrap();
    let y: FixedPoint = "72.11".parse().unwrap();

    println!("x = {} ({:?})", x, x);
    println!("y = {}", y);

    // Arithmetic
    println!("\n=== Arithmetic ===");
    println!("x + y = {}", x.checked_add(y).unwrap());
    println!("x - y = {}", x.checked_sub(y).unwrap());
    println!("x * y = {}", x.checked_mul(y).unwrap());
    println!("x / y = {}", x.checked_div(y).unwrap());
    println!("x ^ -3 = {}", x.checked_pow(-3).unwrap());
    println!("y ^ x = {}", y.checked_powf(x).unwrap());

    // Transcendentals
    println!("\n=== Transcendentals ===");
    println!("sqrt(y) = {}", y.checked_sqrt().unwrap());
    println!("exp2(x) = {}", x.checked_exp2().unwrap());
    println!("exp(x) = {}", x.checked_exp().unwrap());
    println!("log2(y) = {}", y.checked_log2().unwrap());
    println!("ln(y) = {}", y.checked_ln().unwrap());
    println!("log10(y) = {}", y.checked_log10().unwrap());

    // Field-element encoding
    println!("\n=== Field Encoding ===");
    let math = FieldMath;
    let base = math.encode(-10, 1).unwrap();
    for exponent in 1..=3 {
        let power = math.pow(base, exponent).unwrap();
        let (numerator, denominator) = math.decode(power).unwrap();
        println!(
            "(-10)^{} = {}/{} -> felt {} (negative: {})",
            exponent,
            numerator,
            denominator,
            power,
            power.is_upper_half()
        );
    }

    // Failures are reported, never wrapped or clamped
    println!("\n=== Errors ===");
    let zero = math.encode(0, 1).unwrap();
    let one = math.encode(1, 1).unwrap();
    if let Err(e) = math.div(one, zero) {
        println!("1 / 0: {}", e);
    }
    if let Err(e) = math.log2(-one) {
        println!("log2(-1): {}", e);
    }
    if let Err(e) = FixedPoint::MAX.checked_add(FixedPoint::EPSILON) {
        println!("MAX + EPSILON: {}", e);
    }
}
