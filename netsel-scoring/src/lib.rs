//! # netsel-scoring
//!
//! Ranks the candidates of one logical network and picks a winner.
//!
//! Three formulas, selected by [`ScorerKind`]:
//! - `CompatibilityScorer`: legacy RSSI/band/security score, evaluator score wins if set.
//! - `ScoreCardBasedScorer`: RSSI relative to a cutoff learned from signal history.
//! - `ThroughputScorer`: RSSI plus predicted throughput and network bonuses.

pub mod compatibility;
pub mod kind;
pub mod score_card;
pub mod scorer;
pub mod throughput;

pub use kind::ScorerKind;
pub use score_card::{estimate_cutoff_unclamped, estimated_cutoff};
pub use scorer::{best_of, Scorer};
