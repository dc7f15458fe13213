use serde::{Deserialize, Serialize};

use super::Candidate;

/// A scorer's verdict on one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub value: f64,
    /// Coarse uncertainty of `value`; larger is less certain.
    pub confidence_bucket: u32,
    /// Whether a user's explicit connect choice may override this ranking.
    pub allow_user_override: bool,
    pub candidate: Option<Candidate>,
}

impl ScoredCandidate {
    /// Sentinel for "nothing to choose": loses to every real score.
    pub const NONE: ScoredCandidate = ScoredCandidate {
        value: f64::NEG_INFINITY,
        confidence_bucket: u32::MAX,
        allow_user_override: false,
        candidate: None,
    };

    pub fn new(
        value: f64,
        confidence_bucket: u32,
        allow_user_override: bool,
        candidate: Candidate,
    ) -> Self {
        Self {
            value,
            confidence_bucket,
            allow_user_override,
            candidate: Some(candidate),
        }
    }

    pub fn is_none(&self) -> bool {
        self.candidate.is_none()
    }
}

impl Default for ScoredCandidate {
    fn default() -> Self {
        Self::NONE
    }
}
