//! # netsel-core
//!
//! Foundation crate for Wi-Fi candidate network selection.
//! Defines identity types, candidate models, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NetselConfig;
pub use errors::{CandidateFault, NetselError, NetselResult};
pub use identity::{MacAddress, MatchInfo, SecurityType};
pub use models::{Candidate, CandidateKey, NetworkConfig, ScanDetail, ScoredCandidate};
