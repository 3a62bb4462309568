//! Property tests for the frame-rate value types.

use cadence_core::{Fps, FpsRange, approx, is_approx_equal};
use proptest::prelude::*;

proptest! {
    #[test]
    fn positive_period_survives_construction(p in 1_i64..10_000_000_000) {
        let fps = Fps::from_period_nsecs(p);
        prop_assert!(fps.is_valid());
        prop_assert_eq!(fps.period_nsecs(), p);
        prop_assert!(fps.value() > 0.0);
    }

    #[test]
    fn non_positive_period_normalizes_to_sentinel(p in -10_000_000_000_i64..=0) {
        let fps = Fps::from_period_nsecs(p);
        prop_assert!(!fps.is_valid());
        prop_assert_eq!(fps.value(), 0.0);
        prop_assert_eq!(fps.period_nsecs(), 0);
    }

    #[test]
    fn frequency_period_rounds_to_nearest_nanosecond(f in 0.1_f32..10_000.0) {
        let fps = Fps::from_value(f);
        prop_assert!(fps.is_valid());
        prop_assert_eq!(fps.period_nsecs(), (1.0e9_f64 / f64::from(f)).round() as i64);
    }

    #[test]
    fn non_positive_frequency_normalizes_to_sentinel(f in -10_000.0_f32..=0.0) {
        let fps = Fps::from_value(f);
        prop_assert!(!fps.is_valid());
        prop_assert_eq!(fps.value(), 0.0);
        prop_assert_eq!(fps.period_nsecs(), 0);
    }

    #[test]
    fn approx_eq_is_reflexive(f in 0.1_f32..10_000.0) {
        let fps = Fps::from_value(f);
        prop_assert!(approx::eq(fps, fps));
    }

    #[test]
    fn approx_eq_is_symmetric(f in 0.1_f32..10_000.0, delta in -0.01_f32..0.01) {
        let a = Fps::from_value(f);
        let b = Fps::from_value(f + delta);
        prop_assert_eq!(approx::eq(a, b), approx::eq(b, a));
    }

    #[test]
    fn approx_less_implies_strict_gap(a in 0.1_f32..10_000.0, b in 0.1_f32..10_000.0) {
        let (a, b) = (Fps::from_value(a), Fps::from_value(b));
        if approx::lt(a, b) {
            prop_assert!(a.value() < b.value());
            prop_assert!(!is_approx_equal(a, b));
        }
    }

    #[test]
    fn le_ge_are_duals_of_lt(a in 0.1_f32..10_000.0, b in 0.1_f32..10_000.0) {
        let (a, b) = (Fps::from_value(a), Fps::from_value(b));
        prop_assert_eq!(approx::le(a, b), !approx::lt(b, a));
        prop_assert_eq!(approx::ge(a, b), !approx::lt(a, b));
    }

    #[test]
    fn integer_division_multiplies_the_period(f in 1.0_f32..1_000.0, d in 1_u32..8) {
        let fps = Fps::from_value(f);
        let divided = fps / d;
        prop_assert_eq!(divided.period_nsecs(), fps.period_nsecs() * i64::from(d));
    }

    #[test]
    fn range_includes_its_own_bounds(lo in 1.0_f32..500.0, span in 0.0_f32..500.0) {
        let range = FpsRange {
            min: Fps::from_value(lo),
            max: Fps::from_value(lo + span),
        };
        prop_assert!(range.includes(range.min));
        prop_assert!(range.includes(range.max));
        prop_assert!(range.includes_range(range));
    }
}
