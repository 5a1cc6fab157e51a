//! Item collection
//!
//! Turns the raw entries of one payload into records while isolating
//! per-entry failures from page-level ones.

mod classify;
mod types;

pub use classify::{classify, EntryKind, NO_RESULTS_KEY};
pub use types::Collector;
