use std::sync::Arc;

use log::{debug, info};
use quoter_core::{Price, Quote, QuoteId, TradeResult, Volume};
use quoter_ports::Clock;

use crate::index::QuoteIndex;

/// Best-quote lookup and trade execution over a [`QuoteIndex`]
///
/// A quote is eligible when it has available volume and its expiration is
/// strictly later than the clock's current time. Ineligible quotes are
/// skipped, never removed.
pub struct MatchingEngine<C: Clock> {
    clock: Arc<C>,
}

/// One planned take from a resting quote
struct Fill {
    quote_id: QuoteId,
    price: Price,
    volume: Volume,
}

impl<C: Clock> MatchingEngine<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &Arc<C> {
        &self.clock
    }

    /// Copy of the first eligible quote in the symbol's book
    pub fn best_available(&self, index: &QuoteIndex, symbol: &str) -> Option<Quote> {
        let now = self.clock.now();
        index
            .ordered(symbol)
            .find(|quote| quote.is_live_at(now))
            .cloned()
    }

    /// Fill up to `volume_requested` from the symbol's book, best quote first
    ///
    /// Consumed volume is taken out of the stored quotes. Whatever the book
    /// cannot supply is left unfilled.
    pub fn execute_trade(
        &self,
        index: &mut QuoteIndex,
        symbol: &str,
        volume_requested: Volume,
    ) -> TradeResult {
        if volume_requested == 0 {
            debug!("Zero-volume trade request for {}", symbol);
            return TradeResult::empty(symbol, volume_requested);
        }

        let fills = self.plan_fills(index, symbol, volume_requested);

        let mut volume_executed: Volume = 0;
        let mut notional: Price = 0.0;
        for fill in &fills {
            let taken = index.consume(&fill.quote_id, fill.volume).unwrap_or(0);
            debug!(
                "Filled {} @ {} from quote {} ({})",
                taken, fill.price, fill.quote_id, symbol
            );
            volume_executed += taken;
            notional += fill.price * Price::from(taken);
        }

        if volume_executed == 0 {
            info!(
                "No liquidity for {}: requested={}",
                symbol, volume_requested
            );
            return TradeResult::empty(symbol, volume_requested);
        }

        let vwap = notional / Price::from(volume_executed);
        info!(
            "Trade executed: symbol={}, requested={}, executed={}, vwap={}, quotes={}",
            symbol,
            volume_requested,
            volume_executed,
            vwap,
            fills.len()
        );
        TradeResult::filled(symbol, volume_requested, volume_executed, vwap)
    }

    /// Walk the book once, deciding how much to take from each quote
    fn plan_fills(&self, index: &QuoteIndex, symbol: &str, volume: Volume) -> Vec<Fill> {
        let now = self.clock.now();
        let mut remaining = volume;
        let mut fills = Vec::new();

        for quote in index.ordered(symbol) {
            if remaining == 0 {
                break;
            }
            if !quote.is_live_at(now) {
                continue;
            }

            let take = quote.available_volume.min(remaining);
            fills.push(Fill {
                quote_id: quote.id,
                price: quote.price,
                volume: take,
            });
            remaining -= take;
        }

        fills
    }
}
