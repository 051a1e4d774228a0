use std::sync::Arc;

use log::{debug, info, warn};
use quoter_clock::SystemClock;
use quoter_core::{Quote, QuoteId, TradeResult, Volume};
use quoter_matching::{BookIter, MatchingEngine, QuoteIndex};
use quoter_ports::{Clock, QuoteResult};

use crate::config::QuoteManagerConfig;
use crate::error::Result;
use crate::validator::{PricePolicy, QuoteValidator};

/// Single entry point for quote updates, queries and trade execution
///
/// Owns the quote index and delegates every call to it or to the matching
/// engine. Unknown ids and symbols are never errors: removals return
/// `false`, queries return `None` and trades execute nothing.
pub struct QuoteManager<C: Clock = SystemClock> {
    index: QuoteIndex,
    engine: MatchingEngine<C>,
    price_policy: PricePolicy,
}

impl QuoteManager<SystemClock> {
    /// Create an empty manager on wall-clock time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }
}

impl Default for QuoteManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> QuoteManager<C> {
    /// Create an empty manager reading time from the given clock
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            index: QuoteIndex::new(),
            engine: MatchingEngine::new(clock),
            price_policy: PricePolicy::default(),
        }
    }

    /// Create a manager from configuration, loading its seed quotes
    pub fn from_config(config: &QuoteManagerConfig, clock: Arc<C>) -> Result<Self> {
        config.validate()?;

        let mut manager = Self::with_clock(clock).with_price_policy(config.price_policy);
        for quote in &config.seed_quotes {
            manager.add_or_update_quote(quote.clone())?;
        }

        info!(
            "Quote manager '{}' started: clock={}, policy={:?}, seed_quotes={}",
            config.name,
            manager.engine.clock().name(),
            config.price_policy,
            manager.index.len()
        );
        Ok(manager)
    }

    pub fn with_price_policy(mut self, price_policy: PricePolicy) -> Self {
        self.price_policy = price_policy;
        self
    }

    pub fn price_policy(&self) -> PricePolicy {
        self.price_policy
    }

    /// Add a new quote, or update the stored quote carrying the same id
    pub fn add_or_update_quote(&mut self, quote: Quote) -> QuoteResult<()> {
        if let Err(e) = QuoteValidator::validate_quote(&quote, self.price_policy) {
            warn!("Rejected quote {}: {}", quote.id, e);
            return Err(e);
        }

        self.index.add_or_update(quote);
        Ok(())
    }

    /// Remove one quote; false if the id is unknown
    pub fn remove_quote(&mut self, id: &QuoteId) -> bool {
        let removed = self.index.remove(id);
        if !removed {
            debug!("Remove ignored, unknown quote {}", id);
        }
        removed
    }

    /// Remove a symbol's whole book; false if the symbol has no book
    pub fn remove_all_quotes(&mut self, symbol: &str) -> bool {
        let removed = self.index.remove_book(symbol);
        if !removed {
            debug!("Remove ignored, unknown symbol {}", symbol);
        }
        removed
    }

    /// Copy of the best quote with volume that has not expired
    pub fn get_best_quote_with_available_volume(&self, symbol: &str) -> Option<Quote> {
        self.engine.best_available(&self.index, symbol)
    }

    /// Execute a trade of `volume_requested` against the symbol's book
    pub fn execute_trade(&mut self, symbol: &str, volume_requested: Volume) -> TradeResult {
        self.engine
            .execute_trade(&mut self.index, symbol, volume_requested)
    }

    /// Stored quote by id
    pub fn quote(&self, id: &QuoteId) -> Option<&Quote> {
        self.index.get(id)
    }

    /// A symbol's quotes in book order
    pub fn quotes(&self, symbol: &str) -> BookIter<'_> {
        self.index.ordered(symbol)
    }

    pub fn index(&self) -> &QuoteIndex {
        &self.index
    }

    pub fn clock(&self) -> &Arc<C> {
        self.engine.clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use quoter_clock::SimulationClock;
    use quoter_ports::QuoteError;

    fn quote(symbol: &str, price: f64, volume: Volume) -> Quote {
        Quote::new(symbol, price, volume, Utc::now() + Duration::days(1))
    }

    #[test]
    fn test_add_then_lookup() {
        let mut manager = QuoteManager::new();
        let q = quote("EURUSD", 1.1, 10);

        manager.add_or_update_quote(q.clone()).unwrap();

        assert_eq!(manager.quote(&q.id), Some(&q));
        assert_eq!(manager.quotes("EURUSD").count(), 1);
    }

    #[test]
    fn test_rejected_quote_leaves_books_untouched() {
        let mut manager = QuoteManager::new().with_price_policy(PricePolicy::RejectNegative);
        let q = quote("EURUSD", -1.0, 10);

        let err = manager.add_or_update_quote(q.clone()).unwrap_err();

        assert!(matches!(err, QuoteError::InvalidPrice { .. }));
        assert!(manager.quote(&q.id).is_none());
        assert!(manager.index().is_empty());
    }

    #[test]
    fn test_rejected_update_keeps_stored_values() {
        let mut manager = QuoteManager::new();
        let q = quote("EURUSD", 1.0, 10);
        manager.add_or_update_quote(q.clone()).unwrap();

        let mut bad = q.clone();
        bad.price = f64::NAN;
        assert!(manager.add_or_update_quote(bad).is_err());

        assert_eq!(manager.quote(&q.id), Some(&q));
    }

    #[test]
    fn test_removals_report_unknown_targets() {
        let mut manager = QuoteManager::new();

        assert!(!manager.remove_quote(&QuoteId::new_v4()));
        assert!(!manager.remove_all_quotes("EURUSD"));
    }

    #[test]
    fn test_from_config_loads_seed_quotes() {
        let clock = Arc::new(SimulationClock::fixed());
        let config = QuoteManagerConfig {
            seed_quotes: vec![quote("EURUSD", 1.2, 10), quote("EURUSD", 1.1, 10)],
            ..Default::default()
        };

        let manager = QuoteManager::from_config(&config, clock).unwrap();

        assert_eq!(manager.index().len(), 2);
        let best = manager
            .get_best_quote_with_available_volume("EURUSD")
            .unwrap();
        assert_eq!(best.price, 1.1);
    }

    #[test]
    fn test_from_config_rejects_invalid_seed() {
        let clock = Arc::new(SimulationClock::fixed());
        let config = QuoteManagerConfig {
            price_policy: PricePolicy::RejectNegative,
            seed_quotes: vec![quote("EURUSD", -1.2, 10)],
            ..Default::default()
        };

        assert!(QuoteManager::from_config(&config, clock).is_err());
    }
}
