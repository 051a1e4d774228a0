use std::sync::Arc;

use parking_lot::Mutex;
use quoter_clock::SystemClock;
use quoter_core::{Quote, QuoteId, TradeResult, Volume};
use quoter_ports::{Clock, QuoteResult};

use crate::manager::QuoteManager;

/// Thread-safe handle to a [`QuoteManager`]
///
/// Trade execution both walks and mutates a book, and updates can move a
/// quote between books, so every call holds one lock over the whole manager.
/// Clones share the same manager.
pub struct SharedQuoteManager<C: Clock = SystemClock> {
    inner: Arc<Mutex<QuoteManager<C>>>,
}

impl<C: Clock> SharedQuoteManager<C> {
    pub fn new(manager: QuoteManager<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn add_or_update_quote(&self, quote: Quote) -> QuoteResult<()> {
        self.inner.lock().add_or_update_quote(quote)
    }

    pub fn remove_quote(&self, id: &QuoteId) -> bool {
        self.inner.lock().remove_quote(id)
    }

    pub fn remove_all_quotes(&self, symbol: &str) -> bool {
        self.inner.lock().remove_all_quotes(symbol)
    }

    pub fn get_best_quote_with_available_volume(&self, symbol: &str) -> Option<Quote> {
        self.inner.lock().get_best_quote_with_available_volume(symbol)
    }

    pub fn execute_trade(&self, symbol: &str, volume_requested: Volume) -> TradeResult {
        self.inner.lock().execute_trade(symbol, volume_requested)
    }

    /// Copy of a stored quote
    pub fn quote(&self, id: &QuoteId) -> Option<Quote> {
        self.inner.lock().quote(id).cloned()
    }

    /// Run `f` with exclusive access to the manager
    pub fn with_manager<R>(&self, f: impl FnOnce(&mut QuoteManager<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<C: Clock> Clone for SharedQuoteManager<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> From<QuoteManager<C>> for SharedQuoteManager<C> {
    fn from(manager: QuoteManager<C>) -> Self {
        Self::new(manager)
    }
}
