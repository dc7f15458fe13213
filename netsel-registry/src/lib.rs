//! # netsel-registry
//!
//! The per-pass candidate store. Nominated (scan, config) pairs are validated,
//! deduplicated by [`CandidateKey`](netsel_core::CandidateKey), and grouped by
//! stored network for scoring.

pub mod faults;
pub mod registry;

pub use faults::FaultLog;
pub use netsel_core::config::FaultPolicy;
pub use registry::{CandidateAttributes, CandidateRegistry};
