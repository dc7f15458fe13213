use netsel_core::config::ScoringConfig;
use netsel_core::models::{ScoredCandidate, SignalStatistics};
use netsel_scoring::{best_of, estimate_cutoff_unclamped, Scorer, ScorerKind};
use test_fixtures::candidate;

#[test]
fn empty_group_scores_none_for_every_scorer() {
    let params = ScoringConfig::default();
    for kind in ScorerKind::ALL {
        let scorer = Scorer::new(kind, &params);
        let result = scorer.score(&[]);
        assert!(result.is_none());
        assert_eq!(result, ScoredCandidate::NONE);
        assert!(scorer.choose(&[]).is_none());
    }
}

#[test]
fn none_sentinel_shape() {
    let none = ScoredCandidate::NONE;
    assert_eq!(none.value, f64::NEG_INFINITY);
    assert_eq!(none.confidence_bucket, u32::MAX);
    assert!(!none.allow_user_override);
    assert!(none.candidate.is_none());
}

#[test]
fn compatibility_default_scores_100() {
    let params = ScoringConfig::default();
    let scorer = Scorer::new(ScorerKind::Compatibility, &params);
    let result = scorer.score(&[candidate("cafe", 1, 1)]);
    assert_eq!(result.value, 100.0);
    assert_eq!(result.confidence_bucket, 10);
    assert!(!result.allow_user_override);
}

#[test]
fn score_card_cutoff_before_clamping() {
    let stats = SignalStatistics::from_moments(40, -60.0, 16.0);
    let cutoff = estimate_cutoff_unclamped(&stats).unwrap();
    assert!((cutoff + 68.0).abs() < 1e-9);
}

#[test]
fn throughput_breaks_ties_on_rssi() {
    let params = ScoringConfig::default();
    let scorer = Scorer::new(ScorerKind::Throughput, &params);
    let mut weaker = candidate("cafe", 1, 1);
    weaker.scan_rssi = -60;
    let mut stronger = candidate("cafe", 2, 1);
    stronger.scan_rssi = -50;

    assert!(scorer.score_candidate(&stronger) > scorer.score_candidate(&weaker));
    let winner = scorer.score(&[weaker, stronger.clone()]);
    assert_eq!(winner.candidate, Some(stronger));
    assert!(winner.allow_user_override);
}

#[test]
fn exact_tie_keeps_first_candidate() {
    let params = ScoringConfig::default();
    let first = candidate("cafe", 1, 1);
    let second = candidate("cafe", 2, 1);
    for kind in ScorerKind::ALL {
        let scorer = Scorer::new(kind, &params);
        let winner = scorer.score(&[first.clone(), second.clone()]);
        assert_eq!(winner.candidate.as_ref().unwrap().bssid(), first.bssid(), "{kind}");
    }
}

#[test]
fn priority_penalty_only_in_penalizing_scorers() {
    let params = ScoringConfig::default();
    let saved = candidate("home", 1, 1);
    let mut suggested = candidate("cafe", 2, 2);
    suggested.evaluator_priority = 1;
    suggested.scan_rssi = -40;
    let groups = vec![vec![suggested.clone()], vec![saved.clone()]];

    let compat = Scorer::new(ScorerKind::Compatibility, &params).choose(&groups);
    assert_eq!(compat.candidate, Some(saved.clone()));
    let card = Scorer::new(ScorerKind::ScoreCardBased, &params).choose(&groups);
    assert_eq!(card.candidate, Some(saved));

    let throughput = Scorer::new(ScorerKind::Throughput, &params).choose(&groups);
    assert_eq!(throughput.candidate, Some(suggested));
}

#[test]
fn best_of_skips_none_entries() {
    let params = ScoringConfig::default();
    let scorer = Scorer::new(ScorerKind::Compatibility, &params);
    let real = scorer.score(&[candidate("cafe", 1, 1)]);
    let best = best_of(&[ScoredCandidate::NONE, real.clone(), ScoredCandidate::NONE]);
    assert_eq!(best, real);
    assert!(best_of(&[]).is_none());
}

#[test]
fn scorer_kind_serializes_as_identifier() {
    let json = serde_json::to_string(&ScorerKind::ScoreCardBased).unwrap();
    assert_eq!(json, "\"ScoreCardBasedScorer\"");
    let back: ScorerKind = serde_json::from_str("\"CompatibilityScorer\"").unwrap();
    assert_eq!(back, ScorerKind::Compatibility);
    assert!(serde_json::from_str::<ScorerKind>("\"Nope\"").is_err());
    assert_eq!(ScorerKind::from_identifier("ThroughputScorer"), Some(ScorerKind::Throughput));
}
