//! Quoter Ports
//!
//! Port definitions (traits) for the quoter quote book.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;

pub use clock::Clock;
pub use error::{QuoteError, QuoteResult};
