//! Quote Manager
//!
//! Maintains live price quotes per symbol and answers two questions against
//! them: what is the best quote available right now, and what happens when a
//! trade of a given size is executed against a symbol's book.
//!
//! ## Architecture
//!
//! ```text
//!  add / update / remove ──► ┌──────────────────────────────────────┐
//!                            │            QuoteManager              │
//!                            │  ┌────────────────────────────────┐  │
//!                            │  │  QuoteValidator (price policy)  │  │
//!                            │  └───────────────┬────────────────┘  │
//!                            │  ┌───────────────▼────────────────┐  │
//!                            │  │  QuoteIndex                     │  │
//!                            │  │  - quotes by id                 │  │
//!                            │  │  - per-symbol books, best first │  │
//!                            │  └───────────────┬────────────────┘  │
//!                            │  ┌───────────────▼────────────────┐  │
//!  best quote / trade ─────► │  │  MatchingEngine (Clock)         │  │
//!                            │  └────────────────────────────────┘  │
//!                            └──────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quote_manager::QuoteManager;
//! use quoter_core::Quote;
//!
//! let mut manager = QuoteManager::new();
//! manager.add_or_update_quote(Quote::new("EURUSD", 1.1, 100, expiry))?;
//!
//! let best = manager.get_best_quote_with_available_volume("EURUSD");
//! let trade = manager.execute_trade("EURUSD", 40);
//! ```

pub mod config;
pub mod error;
mod manager;
mod shared;
pub mod validator;

pub use config::{ConfigError, QuoteManagerConfig};
pub use error::{Error, Result};
pub use manager::QuoteManager;
pub use shared::SharedQuoteManager;
pub use validator::{PricePolicy, QuoteValidator};

// Re-export domain types used in the public API
pub use quoter_core::{Quote, QuoteId, TradeResult, Volume};
pub use quoter_ports::{Clock, QuoteError, QuoteResult};
