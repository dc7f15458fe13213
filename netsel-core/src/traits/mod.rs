//! Read/write interfaces to the collaborators a selection pass consumes.
//!
//! All collaborators are expected to present a stable snapshot for the
//! duration of one pass. Passes run on a single thread, so mutating calls take
//! `&mut self` and no `Send + Sync` bound is imposed.

pub mod config_store;
pub mod passpoint_matcher;
pub mod scoring_params;
pub mod signal_statistics;
pub mod suggestion_store;

pub use config_store::IConfigStore;
pub use passpoint_matcher::IPasspointMatcher;
pub use scoring_params::IScoringParams;
pub use signal_statistics::ISignalStatistics;
pub use suggestion_store::ISuggestionStore;
