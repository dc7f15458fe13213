use std::fmt;
use std::str::FromStr;

use netsel_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// The closed set of scoring strategies, each with a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScorerKind {
    #[serde(rename = "CompatibilityScorer")]
    Compatibility,
    #[serde(rename = "ScoreCardBasedScorer")]
    ScoreCardBased,
    #[serde(rename = "ThroughputScorer")]
    Throughput,
}

impl ScorerKind {
    pub const ALL: [ScorerKind; 3] = [
        ScorerKind::Compatibility,
        ScorerKind::ScoreCardBased,
        ScorerKind::Throughput,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            ScorerKind::Compatibility => "CompatibilityScorer",
            ScorerKind::ScoreCardBased => "ScoreCardBasedScorer",
            ScorerKind::Throughput => "ThroughputScorer",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.identifier() == identifier)
    }

    /// Whether a user's explicit connect choice may override this ranking.
    /// Only the legacy formula forbids it.
    pub fn allows_user_override(self) -> bool {
        !matches!(self, ScorerKind::Compatibility)
    }
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s.trim()).ok_or_else(|| ConfigError::UnknownScorer {
            identifier: s.to_string(),
        })
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
