use netsel_core::config::ScoringConfig;
use netsel_core::models::Candidate;
use netsel_scoring::{Scorer, ScorerKind};
use proptest::prelude::*;
use test_fixtures::candidate;

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (
        1u8..=255,
        -100i32..=-20,
        prop::sample::select(vec![2412, 2437, 5180, 5745, 5975]),
        0i32..2000,
        0u32..3,
        any::<bool>(),
        any::<bool>(),
        0.0f64..=1.0,
    )
        .prop_map(|(b, rssi, freq, tput, priority, open, metered, weight)| {
            let mut c = candidate("net", b, 1);
            c.scan_rssi = rssi;
            c.frequency_mhz = freq;
            c.predicted_throughput_mbps = tput;
            c.evaluator_priority = priority;
            c.is_open_network = open;
            c.is_metered = metered;
            c.last_selection_weight = weight;
            c
        })
}

fn arb_kind() -> impl Strategy<Value = ScorerKind> {
    prop::sample::select(ScorerKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn winner_has_the_maximum_value(kind in arb_kind(), group in prop::collection::vec(arb_candidate(), 1..12)) {
        let params = ScoringConfig::default();
        let scorer = Scorer::new(kind, &params);
        let winner = scorer.score(&group);
        let max = group.iter().map(|c| scorer.score_candidate(c)).fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(winner.value, max);
        prop_assert!(winner.candidate.is_some());
    }

    #[test]
    fn scoring_is_deterministic(kind in arb_kind(), group in prop::collection::vec(arb_candidate(), 0..12)) {
        let params = ScoringConfig::default();
        let scorer = Scorer::new(kind, &params);
        prop_assert_eq!(scorer.score(&group), scorer.score(&group));
    }

    #[test]
    fn rssi_above_good_threshold_does_not_help(c in arb_candidate(), boost in 1i32..30) {
        let params = ScoringConfig::default();
        let scorer = Scorer::new(ScorerKind::Compatibility, &params);
        let mut at_good = c.clone();
        at_good.scan_rssi = -60;
        at_good.frequency_mhz = 2437;
        let mut above = at_good.clone();
        above.scan_rssi = -60 + boost;
        prop_assert_eq!(scorer.score_candidate(&at_good), scorer.score_candidate(&above));
    }

    #[test]
    fn choose_matches_best_group_winner(kind in arb_kind(), groups in prop::collection::vec(prop::collection::vec(arb_candidate(), 0..5), 0..5)) {
        let params = ScoringConfig::default();
        let scorer = Scorer::new(kind, &params);
        let best = scorer.choose(&groups);
        let max = scorer
            .score_groups(&groups)
            .iter()
            .map(|w| w.value)
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(best.value, max);
    }
}
