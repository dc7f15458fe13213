use serde::{Deserialize, Serialize};

/// What the candidate registry does with malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Record the fault and skip the input. Production behavior.
    #[default]
    Tolerant,
    /// Record the fault and return it as an error. For test harnesses.
    Picky,
}

/// Candidate registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub fault_policy: FaultPolicy,
}
