pub mod candidate;
pub mod network_config;
pub mod passpoint;
pub mod scan_detail;
pub mod scored_candidate;
pub mod signal_statistics;
pub mod suggestion;

pub use candidate::{Candidate, CandidateKey};
pub use network_config::{NetworkConfig, NetworkUpdateResult, SelectionStatus};
pub use passpoint::{PasspointMatch, PasspointProvider};
pub use scan_detail::ScanDetail;
pub use scored_candidate::ScoredCandidate;
pub use signal_statistics::SignalStatistics;
pub use suggestion::{AppId, Suggestion};
