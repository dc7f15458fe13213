//! Scorer: applies one formula to a group of candidates and picks the best.

use std::fmt;

use netsel_core::constants::{BAND_5GHZ_START_MHZ, DEFAULT_CONFIDENCE_BUCKET, EVALUATOR_PRIORITY_PENALTY};
use netsel_core::models::{Candidate, ScoredCandidate};
use netsel_core::traits::IScoringParams;
use tracing::trace;

use crate::kind::ScorerKind;
use crate::{compatibility, score_card, throughput};

/// A scoring strategy bound to its parameters for one pass.
///
/// Scoring is deterministic and side-effect free: the same group and
/// parameters always produce the same winner.
#[derive(Clone, Copy)]
pub struct Scorer<'p> {
    kind: ScorerKind,
    params: &'p dyn IScoringParams,
}

impl<'p> Scorer<'p> {
    pub fn new(kind: ScorerKind, params: &'p dyn IScoringParams) -> Self {
        Self { kind, params }
    }

    pub fn kind(&self) -> ScorerKind {
        self.kind
    }

    pub fn identifier(&self) -> &'static str {
        self.kind.identifier()
    }

    /// Value this scorer assigns to a single candidate.
    pub fn score_candidate(&self, candidate: &Candidate) -> f64 {
        match self.kind {
            ScorerKind::Compatibility => compatibility::score(candidate, self.params) as f64,
            ScorerKind::ScoreCardBased => score_card::score(candidate, self.params) as f64,
            ScorerKind::Throughput => throughput::value(candidate, self.params),
        }
    }

    /// Best candidate of one network's group. `NONE` for an empty group.
    ///
    /// The strictly greatest value wins; on an exact tie the earlier
    /// candidate is kept.
    pub fn score(&self, group: &[Candidate]) -> ScoredCandidate {
        let mut best = ScoredCandidate::NONE;
        for candidate in group {
            let value = self.score_candidate(candidate);
            trace!(
                scorer = self.identifier(),
                candidate = %candidate.key.match_info,
                bssid = %candidate.bssid(),
                value,
                "scored candidate"
            );
            if value > best.value {
                best = ScoredCandidate::new(
                    value,
                    DEFAULT_CONFIDENCE_BUCKET,
                    self.kind.allows_user_override(),
                    candidate.clone(),
                );
            }
        }
        best
    }

    /// One winner per group, in group order.
    pub fn score_groups(&self, groups: &[Vec<Candidate>]) -> Vec<ScoredCandidate> {
        groups.iter().map(|group| self.score(group)).collect()
    }

    /// Overall best across all groups. `NONE` if there are no groups.
    pub fn choose(&self, groups: &[Vec<Candidate>]) -> ScoredCandidate {
        best_of(&self.score_groups(groups))
    }
}

impl fmt::Debug for Scorer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scorer").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// Strict maximum by value, first wins on ties. `NONE` for an empty slice.
pub fn best_of(scored: &[ScoredCandidate]) -> ScoredCandidate {
    let mut best: Option<&ScoredCandidate> = None;
    for candidate in scored {
        if candidate.value > best.map_or(f64::NEG_INFINITY, |b| b.value) {
            best = Some(candidate);
        }
    }
    best.cloned().unwrap_or_default()
}

/// RSSI capped at the band's good threshold.
pub(crate) fn saturated_rssi(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    i64::from(candidate.scan_rssi.min(params.good_rssi(candidate.frequency_mhz)))
}

pub(crate) fn band_and_security_award(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    let mut award = 0;
    if candidate.frequency_mhz >= BAND_5GHZ_START_MHZ {
        award += i64::from(params.band_5ghz_award());
    }
    if !candidate.is_open_network {
        award += i64::from(params.security_award());
    }
    award
}

pub(crate) fn last_selection_bonus(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    (candidate.last_selection_weight * f64::from(params.last_selection_award())).trunc() as i64
}

pub(crate) fn priority_penalty(candidate: &Candidate) -> i64 {
    i64::from(EVALUATOR_PRIORITY_PENALTY) * i64::from(candidate.evaluator_priority)
}
