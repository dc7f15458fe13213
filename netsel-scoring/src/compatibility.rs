//! Legacy-compatible scoring.
//!
//! A nonzero evaluator score is taken as-is. Zero means "not provided", so a
//! nominator that genuinely scored a candidate 0 gets the RSSI formula instead.

use netsel_core::constants::{RSSI_SCORE_OFFSET, RSSI_SCORE_SLOPE};
use netsel_core::models::Candidate;
use netsel_core::traits::IScoringParams;

use crate::scorer::{band_and_security_award, priority_penalty, saturated_rssi};

pub fn score(candidate: &Candidate, params: &dyn IScoringParams) -> i64 {
    let base = if candidate.evaluator_score != 0 {
        i64::from(candidate.evaluator_score)
    } else {
        let rssi = saturated_rssi(candidate, params);
        (rssi + i64::from(RSSI_SCORE_OFFSET)) * i64::from(RSSI_SCORE_SLOPE)
            + band_and_security_award(candidate, params)
    };
    base - priority_penalty(candidate)
}
