use dec_big_num::{BigInt, BigIntError, Sign, RADIX};
use proptest::prelude::*;

fn big_int() -> impl Strategy<Value = BigInt> {
    "[+-]?[0-9]{1,60}".prop_map(|s| s.parse::<BigInt>().unwrap())
}

fn non_zero_big_int() -> impl Strategy<Value = BigInt> {
    big_int().prop_filter("divisor must be non-zero", |b| !b.is_zero())
}

fn assert_canonical(val: &BigInt) {
    let limbs = val.limbs();
    assert!(!limbs.is_empty());
    assert!(limbs.iter().all(|&limb| limb < RADIX));
    if limbs.len() > 1 {
        assert_ne!(limbs.last(), Some(&0), "leading zero limb in {:?}", val);
    }
    if val.is_zero() {
        assert_eq!(val.sign(), Sign::Positive);
    }
}

proptest! {
    #[test]
    fn test_canonical_results(a in big_int(), b in non_zero_big_int()) {
        for val in [&a + &b, &a - &b, &a * &b, &a / &b, &a % &b, -&a, a.abs(), a.pow(3)] {
            assert_canonical(&val);
        }
    }

    #[test]
    fn test_additive_identity_and_inverse(a in big_int()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a + &(-&a), BigInt::zero());
    }

    #[test]
    fn test_commutative_associative(a in big_int(), b in big_int(), c in big_int()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn test_sub_is_add_neg(a in big_int(), b in big_int()) {
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn test_div_rem_consistent(a in big_int(), b in non_zero_big_int()) {
        let q = &a / &b;
        let r = &a % &b;
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    }

    #[test]
    fn test_div_by_zero(a in big_int()) {
        prop_assert!(matches!(a.checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero)));
        prop_assert!(matches!(a.checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero)));
    }

    #[test]
    fn test_render_parse_round_trip(a in big_int()) {
        let text = a.to_string();
        prop_assert_eq!(text.parse::<BigInt>().unwrap(), a);
    }

    #[test]
    fn test_total_order(a in big_int(), b in big_int()) {
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);
        prop_assert_eq!(a < b, (&a - &b).is_negative());
    }

    #[test]
    fn test_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
    }

    #[test]
    fn test_display_matches_native(a in any::<i64>()) {
        prop_assert_eq!(BigInt::from(a).to_string(), a.to_string());
        prop_assert_eq!(BigInt::from(a).to_i64(), Some(a));
    }
}
