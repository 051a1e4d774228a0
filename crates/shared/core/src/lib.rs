//! Quoter Core Domain
//!
//! Pure domain types for the quoter quote book.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod ordering;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Quote, TradeResult};
pub use ordering::{QuoteKey, compare_quotes};
pub use values::{Price, QuoteId, Symbol, Timestamp, TradeId, Volume};
