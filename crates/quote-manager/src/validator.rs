use quoter_core::Quote;
use quoter_ports::{QuoteError, QuoteResult};
use serde::{Deserialize, Serialize};

/// Which prices the manager accepts on incoming quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePolicy {
    /// Any finite price, negative included
    #[default]
    AcceptAny,
    /// Finite prices at or above zero
    RejectNegative,
}

/// Validates incoming quotes before they reach the index
pub struct QuoteValidator;

impl QuoteValidator {
    pub fn validate_quote(quote: &Quote, policy: PricePolicy) -> QuoteResult<()> {
        if quote.symbol.trim().is_empty() {
            return Err(QuoteError::InvalidSymbol(quote.symbol.clone()));
        }

        // NaN and infinities cannot be ranked in a book
        if !quote.price.is_finite() {
            return Err(QuoteError::InvalidPrice {
                id: quote.id,
                price: quote.price,
            });
        }

        if policy == PricePolicy::RejectNegative && quote.price < 0.0 {
            return Err(QuoteError::InvalidPrice {
                id: quote.id,
                price: quote.price,
            });
        }

        Ok(())
    }
}
