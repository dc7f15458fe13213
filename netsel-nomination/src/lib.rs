//! # netsel-nomination
//!
//! Turns scan results, app suggestions, and Passpoint provider matches into
//! connectable (scan, network config) pairs.
//!
//! Nominators run in [`NominatorId`] order. Each reports its pairs through
//! an `on_connectable` sink; the id doubles as the evaluator priority of
//! every pair it reports.

pub mod materialize;
pub mod nominator;
pub mod passpoint;
pub mod passpoint_helper;
pub mod saved;
pub mod suggestion;

pub use nominator::{NetworkNominator, NominationContext, NominationSources, NominatorId};
