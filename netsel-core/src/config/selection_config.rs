use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Identifier of the active scorer, e.g. "ThroughputScorer".
    pub scorer: String,
    /// Minutes after a user selection until its bonus reaches zero.
    pub last_selection_decay_minutes: i64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            scorer: defaults::DEFAULT_SCORER.to_string(),
            last_selection_decay_minutes: defaults::DEFAULT_LAST_SELECTION_DECAY_MINUTES,
        }
    }
}
