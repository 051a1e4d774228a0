use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{Price, QuoteId, Symbol, Volume};

/// A price offer for a symbol
///
/// The id is the primary key and never changes after creation. Every other
/// field may be rewritten by an update carrying the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    #[serde(default = "Uuid::new_v4")]
    pub id: QuoteId,
    pub symbol: Symbol,
    pub price: Price,
    pub available_volume: Volume,
    pub expiration_date: DateTime<Utc>,
}

impl Quote {
    /// Create a quote with a freshly generated id
    pub fn new(
        symbol: impl Into<Symbol>,
        price: Price,
        available_volume: Volume,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            symbol,
            price,
            available_volume,
            expiration_date,
        )
    }

    /// Create a quote for an existing id (used to update a stored quote)
    pub fn with_id(
        id: QuoteId,
        symbol: impl Into<Symbol>,
        price: Price,
        available_volume: Volume,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            price,
            available_volume,
            expiration_date,
        }
    }

    /// An expiration at or before `now` counts as expired
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date <= now
    }

    /// Whether the quote can be matched against at `now`
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.available_volume > 0 && !self.is_expired_at(now)
    }

    /// Price times available volume
    pub fn notional(&self) -> Price {
        self.price * Price::from(self.available_volume)
    }
}
