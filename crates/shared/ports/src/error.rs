use quoter_core::{Price, QuoteId};
use thiserror::Error;

/// Domain-level errors for quote updates
///
/// Lookups of unknown ids or symbols are not errors; they surface as
/// `false`, `None` or an empty trade result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Invalid price {price} for quote {id}")]
    InvalidPrice { id: QuoteId, price: Price },

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

pub type QuoteResult<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let id = QuoteId::nil();
        let err = QuoteError::InvalidPrice { id, price: -1.5 };
        assert_eq!(
            err.to_string(),
            "Invalid price -1.5 for quote 00000000-0000-0000-0000-000000000000"
        );

        let err = QuoteError::InvalidSymbol("  ".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: \"  \"");
    }
}
