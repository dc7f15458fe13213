//! Throughput-aware scoring.
//!
//! No evaluator priority penalty: network bonuses decide between sources.
//! The final value adds `rssi / 1000` so stronger signal breaks exact ties.

use netsel_core::constants::{RSSI_SCORE_OFFSET, RSSI_SCORE_SLOPE};
use netsel_core::models::Candidate;
use netsel_core::traits::IScoringParams;

use crate::scorer::{last_selection_bonus, saturated_rssi};

pub fn score(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    let rssi = saturated_rssi(candidate, params);
    let mut score = (rssi + i64::from(RSSI_SCORE_OFFSET)) * i64::from(RSSI_SCORE_SLOPE)
        + throughput_bonus(candidate.predicted_throughput_mbps, params)
        + last_selection_bonus(candidate, params);
    if candidate.is_current_network {
        score += i64::from(params.current_network_bonus());
    }
    if !candidate.is_open_network {
        score += i64::from(params.secure_network_bonus());
    }
    if !candidate.is_metered {
        score += i64::from(params.unmetered_network_bonus());
    }
    if !candidate.is_ephemeral {
        score += i64::from(params.saved_network_bonus());
    }
    score
}

pub fn value(candidate: &Candidate, params: &dyn IScoringParams) -> f64 {
    score(candidate, params) as f64 + f64::from(candidate.scan_rssi) / 1000.0
}

/// `min(tput × numerator / denominator, limit)`; zero for a non-positive denominator.
pub fn throughput_bonus(throughput_mbps: i32, params: &dyn IScoringParams) -> i64 {
    let raw = i64::from(throughput_mbps) * i64::from(params.throughput_bonus_numerator());
    let denominator = i64::from(params.throughput_bonus_denominator());
    if denominator <= 0 {
        return 0;
    }
    (raw / denominator).min(i64::from(params.throughput_bonus_limit()))
}
