use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::values::{Price, Symbol, TradeId, Volume};

/// Outcome of a single trade execution request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeResult {
    pub id: TradeId,
    pub symbol: Symbol,
    pub volume_weighted_average_price: Price,
    pub volume_requested: Volume,
    pub volume_executed: Volume,
}

impl TradeResult {
    /// Result for a request that executed nothing
    pub fn empty(symbol: impl Into<Symbol>, volume_requested: Volume) -> Self {
        Self::filled(symbol, volume_requested, 0, 0.0)
    }

    /// Result for a request that executed `volume_executed` at the given VWAP
    pub fn filled(
        symbol: impl Into<Symbol>,
        volume_requested: Volume,
        volume_executed: Volume,
        volume_weighted_average_price: Price,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            volume_weighted_average_price,
            volume_requested,
            volume_executed,
        }
    }

    pub fn is_fully_filled(&self) -> bool {
        self.volume_executed == self.volume_requested
    }

    /// Requested volume left unmet
    pub fn unfilled_volume(&self) -> Volume {
        self.volume_requested - self.volume_executed
    }

    /// Total cost of the executed volume (VWAP * executed)
    pub fn notional(&self) -> Price {
        self.volume_weighted_average_price * Price::from(self.volume_executed)
    }
}
