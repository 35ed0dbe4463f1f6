#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Natural;

    // magnitudes stay small: mul steps through add, which steps through succ
    const MAX_MAGNITUDE: i64 = 64;

    prop_compose! {
        fn arb_valid()(n in 0..MAX_MAGNITUDE) -> Natural {
            Natural::of(n)
        }
    }

    // either a valid natural or the invalid state
    fn arb_natural() -> BoxedStrategy<Natural> {
        prop_oneof![
            4 => arb_valid(),
            1 => Just(Natural::INVALID),
        ]
        .boxed()
    }

    proptest! {
        #[test]
        fn domain_boundary_at_zero(n in 0..i64::MAX) {
            prop_assert!(Natural::of(n).is_valid());
            prop_assert!(!Natural::of(-1 - n).is_valid());
        }
    }

    proptest! {
        #[test]
        fn succ_increments(n in 0..i64::MAX) {
            let next = Natural::of(n).succ();
            prop_assert!(next.is_valid());
            prop_assert_eq!(next.get(), Some(n as u64 + 1));
        }
    }

    proptest! {
        #[test]
        fn zero_is_additive_identity(a in arb_valid()) {
            prop_assert_eq!(Natural::zero().add(a), a);
            prop_assert_eq!(a.add(Natural::zero()), a);
        }
    }

    proptest! {
        #[test]
        fn add_matches_native(a in 0..MAX_MAGNITUDE, b in 0..MAX_MAGNITUDE) {
            prop_assert_eq!(Natural::of(a).add(Natural::of(b)), Natural::of(a + b));
        }
    }

    proptest! {
        #[test]
        fn add_commutes(a in arb_natural(), b in arb_natural()) {
            prop_assert_eq!(a.add(b), b.add(a));
        }
    }

    proptest! {
        #[test]
        fn sub_matches_native_or_underflows(a in 0..MAX_MAGNITUDE, b in 0..MAX_MAGNITUDE) {
            let diff = Natural::of(a).sub(Natural::of(b));
            if a >= b {
                prop_assert_eq!(diff, Natural::of(a - b));
            } else {
                prop_assert!(!diff.is_valid());
            }
        }
    }

    proptest! {
        #[test]
        fn sub_undoes_add(a in arb_valid(), b in arb_valid()) {
            prop_assert_eq!(a.add(b).sub(b), a);
        }
    }

    proptest! {
        #[test]
        fn mul_matches_native(a in 0..MAX_MAGNITUDE, b in 0..MAX_MAGNITUDE) {
            prop_assert_eq!(Natural::of(a).mul(Natural::of(b)), Natural::of(a * b));
        }
    }

    proptest! {
        #[test]
        fn mul_by_zero_and_one(a in arb_valid()) {
            prop_assert_eq!(a.mul(Natural::zero()), Natural::zero());
            prop_assert_eq!(Natural::zero().mul(a), Natural::zero());
            prop_assert_eq!(a.mul(Natural::one()), a);
        }
    }

    proptest! {
        #[test]
        fn invalid_absorbs(a in arb_natural()) {
            let invalid = Natural::INVALID;
            prop_assert_eq!(invalid.add(a), invalid);
            prop_assert_eq!(a.add(invalid), invalid);
            prop_assert_eq!(invalid.sub(a), invalid);
            prop_assert_eq!(a.sub(invalid), invalid);
            prop_assert_eq!(invalid.mul(a), invalid);
            prop_assert_eq!(a.mul(invalid), invalid);
            prop_assert_eq!(invalid.succ(), invalid);
        }
    }

    proptest! {
        #[test]
        fn results_never_negative(a in arb_natural(), b in arb_natural()) {
            for result in [a.add(b), a.sub(b), a.mul(b)].iter() {
                prop_assert_eq!(result.is_valid(), result.get().is_some());
            }
        }
    }
}
