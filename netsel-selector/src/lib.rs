//! # netsel-selector
//!
//! Runs one selection pass over a scan batch:
//! nominate → register → group → score → choose.

pub mod last_selection;
pub mod selector;
pub mod tracing_setup;

pub use last_selection::{last_selection_weight, LastUserSelection};
pub use selector::{NetworkSelector, SelectionContext, SelectionOutcome};
