use super::{CandidateFault, ConfigError};

/// Top-level error for every netsel crate.
#[derive(Debug, thiserror::Error)]
pub enum NetselError {
    #[error("candidate rejected: {0}")]
    Candidate(#[from] CandidateFault),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type NetselResult<T> = Result<T, NetselError>;
