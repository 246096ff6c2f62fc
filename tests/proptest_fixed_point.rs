use math64x61::prelude::*;
use proptest::prelude::*;

const BOUND: i128 = 1 << 125;

fn raw(value: i128) -> FixedPoint {
    FixedPoint::from_raw(value).unwrap()
}

fn int(value: i128) -> FixedPoint {
    FixedPoint::from_integer(value).unwrap()
}

// Property 1: Encoding a dyadic rational and decoding it is lossless
proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        numerator in -1_000_000_000_000i128..1_000_000_000_000i128,
        exponent in 0u32..=61
    ) {
        let denominator = 1i128 << exponent;
        let value = NativeMath.encode(numerator, denominator).unwrap();
        let (n, d) = NativeMath.decode(value).unwrap();

        // Same rational, reduced denominator
        prop_assert_eq!(n * denominator, numerator * d);
        prop_assert!(d > 0 && d <= denominator);
        prop_assert!(d == 1 || n % 2 != 0);
    }
}

// Property 2: Integer products are exact
proptest! {
    #[test]
    fn prop_integer_multiplication_exact(
        a in -(1i128 << 31)..(1i128 << 31),
        b in -(1i128 << 31)..(1i128 << 31)
    ) {
        let product = int(a).checked_mul(int(b)).unwrap();
        prop_assert_eq!(product, int(a * b));
    }
}

// Property 3: Multiplication is commutative (bit-exact)
proptest! {
    #[test]
    fn prop_multiplication_commutative(
        a in -(1i128 << 93)..(1i128 << 93),
        b in -(1i128 << 93)..(1i128 << 93)
    ) {
        prop_assert_eq!(raw(a).checked_mul(raw(b)), raw(b).checked_mul(raw(a)));
    }
}

// Property 4: Division by an integer undoes multiplication by it
proptest! {
    #[test]
    fn prop_division_inverts_integer_multiplication(
        a in -(1i128 << 100)..(1i128 << 100),
        b in prop_oneof![-(1i128 << 20)..-1i128, 1i128..(1i128 << 20)]
    ) {
        let b = int(b);
        let product = raw(a).checked_mul(b).unwrap();
        prop_assert_eq!(product.checked_div(b).unwrap(), raw(a));
    }
}

// Property 5: Quotient times divisor returns the dividend within |b| + 2 ulps
proptest! {
    #[test]
    fn prop_division_self_inverse(
        a in -(1i128 << 100)..(1i128 << 100),
        b in (1i128 << 61)..(1i128 << 80),
        negate in any::<bool>()
    ) {
        let b = if negate { -raw(b) } else { raw(b) };
        let quotient = raw(a).checked_div(b).unwrap();
        let back = quotient.checked_mul(b).unwrap();

        let ulps = u32::try_from(b.abs().integer_part() + 2).unwrap();
        prop_assert!(
            Tolerance::ulps(ulps).is_close(back, raw(a)),
            "({} / {}) * {} = {}", raw(a), b, b, back
        );
    }
}

// Property 6: Power identities
proptest! {
    #[test]
    fn prop_power_identities(
        base in prop_oneof![-20i128..=-2, 2i128..=20],
        exponent in 0i64..=8
    ) {
        let x = int(base);
        prop_assert_eq!(x.checked_pow(0).unwrap(), FixedPoint::ONE);

        let positive = x.checked_pow(exponent).unwrap();
        let negative = x.checked_pow(-exponent).unwrap();
        prop_assert_eq!(negative, FixedPoint::ONE.checked_div(positive).unwrap());

        // Sign alternates with the exponent's parity
        let mirrored = (-x).checked_pow(exponent).unwrap();
        if exponent % 2 == 0 {
            prop_assert_eq!(mirrored, positive);
        } else {
            prop_assert_eq!(mirrored, -positive);
        }
    }
}

// Property 7: log2 inverts exp2
proptest! {
    #[test]
    fn prop_exp2_log2_inverse(v in -20.0f64..20.0f64) {
        let x = FixedPoint::from_f64(v).unwrap();
        let back = x.checked_exp2().unwrap().checked_log2().unwrap();
        prop_assert!(
            Tolerance::transcendental().is_close(back, x),
            "log2(exp2({})) = {}", x, back
        );
    }
}

// Property 8: sqrt squares back to its input
proptest! {
    #[test]
    fn prop_sqrt_squares_back(a in 1i128..BOUND) {
        let x = raw(a);
        let root = x.checked_sqrt().unwrap();
        let square = root.checked_mul(root).unwrap();
        prop_assert!(square <= x);
        prop_assert!(
            Tolerance::transcendental().is_close(square, x),
            "sqrt({})^2 = {}", x, square
        );
    }
}

// Property 9: Native and field backends agree and are deterministic
proptest! {
    #[test]
    fn prop_backends_agree(
        a in -(BOUND - 1)..BOUND,
        b in -(BOUND - 1)..BOUND
    ) {
        let (x, y) = (raw(a), raw(b));
        let (fx, fy) = (x.to_felt(), y.to_felt());

        prop_assert_eq!(FixedPoint::from_felt(fx).unwrap(), x);
        prop_assert_eq!(
            FieldMath.add(fx, fy),
            NativeMath.add(x, y).map(FixedPoint::to_felt)
        );
        prop_assert_eq!(
            FieldMath.mul(fx, fy),
            NativeMath.mul(x, y).map(FixedPoint::to_felt)
        );
        prop_assert_eq!(
            FieldMath.div(fx, fy),
            NativeMath.div(x, y).map(FixedPoint::to_felt)
        );
        prop_assert_eq!(NativeMath.mul(x, y), NativeMath.mul(x, y));
    }
}

// Addition and subtraction are symmetric wherever both are in range
#[test]
fn quickcheck_add_sub_symmetry() {
    fn prop(a: i64, b: i64) -> bool {
        let x = raw((a as i128) << 40);
        let y = raw((b as i128) << 40);
        let sum = x.checked_add(y).unwrap();
        sum.checked_sub(y) == Ok(x) && sum.checked_sub(x) == Ok(y)
    }

    quickcheck::quickcheck(prop as fn(i64, i64) -> bool);
}
