use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Quote price - plain floating point, sign is not constrained here
pub type Price = f64;

/// Tradable size - non-negative whole units
pub type Volume = u32;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier grouping quotes into a book
pub type Symbol = String;

/// Unique identifier for a quote
pub type QuoteId = Uuid;

/// Unique identifier for a trade result
pub type TradeId = Uuid;
