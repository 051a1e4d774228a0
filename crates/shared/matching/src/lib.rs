//! Quoter Matching
//!
//! The quote index (identifier map plus per-symbol books) and the matching
//! engine that answers best-quote queries and executes trades against it.

mod engine;
mod index;

pub use engine::MatchingEngine;
pub use index::{BookIter, QuoteIndex};

// Re-export the port for convenience
pub use quoter_ports::Clock;
