use astro_math::scalar::*;
use proptest::prelude::*;

// ── Sign ──

#[test]
fn test_sign() {
    assert_eq!(sign(-32.2), -1);
    assert_eq!(sign(0.0), 0);
    assert_eq!(sign(-0.0), 0);
    assert_eq!(sign(722.0), 1);
    assert_eq!(sign(f64::NEG_INFINITY), -1);
    assert_eq!(sign(f64::NAN), 0);
}

// ── SimplifyNumber ──

#[test]
fn test_simplify_number_reference_values() {
    let cases: &[(u64, u64)] = &[(3, 3), (10, 1), (28, 1), (288, 9), (98765, 8)];
    for &(number, expected) in cases {
        assert_eq!(simplify_number(number), expected, "number={}", number);
    }
}

#[test]
fn test_simplify_number_zero_and_extremes() {
    assert_eq!(simplify_number(0), 0);
    assert_eq!(simplify_number(9), 9);
    // 87 -> 15 -> 6
    assert_eq!(simplify_number(u64::MAX), 6);
}

proptest! {
    #[test]
    fn simplify_matches_digit_root(n in 1u64..u64::MAX) {
        prop_assert_eq!(simplify_number(n), 1 + (n - 1) % 9);
    }
}
