//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn int_add_commutative(a in any::<i64>(), b in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn int_add_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            let c = BigInt::from_i64(c);
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn int_mul_commutative(a in any::<i64>(), b in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn int_mul_associative(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            let c = BigInt::from_i64(c);
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn int_distributive(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            let c = BigInt::from_i64(c);
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn int_additive_inverse(a in any::<i64>()) {
            let a = BigInt::from_i64(a);
            let zero = BigInt::new();

            // canonical zero is always non-negative
            let z = a.add(&a.inv_sign());
            prop_assert_eq!(&z, &zero);
            prop_assert!(!z.is_negative());
            prop_assert_eq!(a.sub(&a), zero);
        }

        #[test]
        fn int_division_remainder_identity(
            a1 in any::<i64>(),
            a2 in any::<i64>(),
            b in any::<i64>().prop_filter("non-zero divisor", |v| *v != 0)
        ) {
            let a = BigInt::from_i128(a1 as i128 * a2 as i128);
            let b = BigInt::from_i64(b);

            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q.mul(&b).add(&r), a.clone());

            if !r.is_zero() {
                prop_assert_eq!(r.sign(), a.sign());
            }
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn int_ordering_matches_native(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(BigInt::from_i64(a).cmp(&BigInt::from_i64(b)), a.cmp(&b));
        }

        #[test]
        fn int_display_parse_roundtrip(a in any::<i128>()) {
            let a = BigInt::from_i128(a);
            prop_assert_eq!(BigInt::parse(&a.to_string()).unwrap(), a);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            let g = a.gcd(&b);

            prop_assert!(a.checked_rem(&g).unwrap().is_zero());
            prop_assert!(b.checked_rem(&g).unwrap().is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = BigInt::from_i64(a);
            let b = BigInt::from_i64(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms and canonical form

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_parts(BigInt::from_i64(num_a), BigInt::from_i64(den_a)).unwrap();
            let b = Rational::from_parts(BigInt::from_i64(num_b), BigInt::from_i64(den_b)).unwrap();
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn rational_mul_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_parts(BigInt::from_i64(num_a), BigInt::from_i64(den_a)).unwrap();
            let b = Rational::from_parts(BigInt::from_i64(num_b), BigInt::from_i64(den_b)).unwrap();
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_parts(BigInt::from_i64(num_a), BigInt::from_i64(den_a)).unwrap();
            let b = Rational::from_parts(BigInt::from_i64(num_b), BigInt::from_i64(den_b)).unwrap();
            let c = Rational::from_parts(BigInt::from_i64(num_c), BigInt::from_i64(den_c)).unwrap();
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn rational_reduced_invariant(
            num in small_int(),
            den in non_zero_int(),
            num2 in small_int(),
            den2 in non_zero_int()
        ) {
            let a = Rational::from_parts(BigInt::from_i64(num), BigInt::from_i64(den)).unwrap();
            let b = Rational::from_parts(BigInt::from_i64(num2), BigInt::from_i64(den2)).unwrap();

            let one = BigInt::from_i64(1);
            for r in [a.add(&b), a.sub(&b), a.mul(&b)] {
                prop_assert!(r.denominator().is_positive());
                prop_assert_eq!(&r.numerator().gcd(r.denominator()), &one);
                if r.numerator().is_zero() {
                    prop_assert_eq!(r.denominator(), &one);
                }
            }
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_parts(BigInt::from_i64(num), BigInt::from_i64(den)).unwrap();
            let inv = a.recip().unwrap();
            prop_assert_eq!(a.mul(&inv), Rational::from(1i64));
        }

        #[test]
        fn rational_display_parse_roundtrip(num in any::<i64>(), den in non_zero_int()) {
            let a = Rational::from_parts(BigInt::from_i64(num), BigInt::from_i64(den)).unwrap();
            prop_assert_eq!(Rational::parse(&a.to_string()).unwrap(), a);
        }
    }
}
