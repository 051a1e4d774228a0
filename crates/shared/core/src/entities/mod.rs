mod quote;
mod trade_result;

pub use quote::Quote;
pub use trade_result::TradeResult;
