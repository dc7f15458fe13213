//! Score-card scoring: RSSI measured against a per-BSSID cutoff.
//!
//! With enough history the cutoff is two standard deviations below the mean
//! polled RSSI, kept within the configured rails. Otherwise the fixed
//! offset applies.

use netsel_core::constants::{MIN_POLLS_FOR_SIGNIFICANCE, RSSI_SCORE_OFFSET, RSSI_SCORE_SLOPE};
use netsel_core::models::{Candidate, SignalStatistics};
use netsel_core::traits::IScoringParams;

use crate::scorer::{band_and_security_award, last_selection_bonus, priority_penalty, saturated_rssi};

/// `mean - 2σ` of the polled RSSI, or `None` below the significance threshold.
pub fn estimate_cutoff_unclamped(stats: &SignalStatistics) -> Option<f64> {
    if stats.count < MIN_POLLS_FOR_SIGNIFICANCE {
        return None;
    }
    let mean = stats.mean()?;
    let sigma = stats.std_dev()?;
    Some(mean - 2.0 * sigma)
}

/// Cutoff used by the formula, truncated toward zero after clamping.
pub fn estimated_cutoff(stats: Option<&SignalStatistics>, params: &dyn IScoringParams) -> i64 {
    match stats.and_then(estimate_cutoff_unclamped) {
        Some(raw) => {
            let min = f64::from(params.cutoff_rssi_min());
            let max = f64::from(params.cutoff_rssi_max());
            raw.max(min).min(max).trunc() as i64
        }
        None => -i64::from(RSSI_SCORE_OFFSET),
    }
}

pub fn score(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    let cutoff = estimated_cutoff(candidate.historical_signal_stats.as_ref(), params);
    let rssi = saturated_rssi(candidate, params);
    (rssi - cutoff) * i64::from(RSSI_SCORE_SLOPE)
        + band_and_security_award(candidate, params)
        + last_selection_bonus(candidate, params)
        - priority_penalty(candidate)
}
