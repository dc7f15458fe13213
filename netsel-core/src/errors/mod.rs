//! Error handling for netsel.
//! One error enum per subsystem, `thiserror` only.

pub mod candidate_fault;
pub mod config_error;
pub mod netsel_error;

pub use candidate_fault::CandidateFault;
pub use config_error::ConfigError;
pub use netsel_error::{NetselError, NetselResult};
