use chrono::Duration;
use netsel_selector::last_selection_weight;
use proptest::prelude::*;

proptest! {
    #[test]
    fn weight_stays_in_unit_interval(elapsed in -10_000i64..100_000, decay in 1i64..10_000) {
        let w = last_selection_weight(Duration::minutes(elapsed), Duration::minutes(decay));
        prop_assert!((0.0..=1.0).contains(&w));
    }

    #[test]
    fn weight_never_grows_with_time(a in 0i64..2_000, b in 0i64..2_000, decay in 1i64..1_000) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let decay = Duration::minutes(decay);
        prop_assert!(
            last_selection_weight(Duration::minutes(later), decay)
                <= last_selection_weight(Duration::minutes(earlier), decay)
        );
    }
}
