//! Core error types for the valuation engine.
//!
//! Transport-level errors from the market data crate are wrapped here; the
//! only locally recoverable condition (an unlisted pair) never reaches this
//! type because the resolver handles it via the bridge fallback.

use thiserror::Error;

use coinfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
///
/// Every variant is fatal for the current run: the engine favors an
/// all-or-nothing valuation over silently dropping unpriced holdings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Cannot total an empty portfolio")]
    EmptyPortfolio,

    #[error("No price available for '{symbol}', directly or via the bridge asset")]
    PriceNotFound {
        /// The coin symbol that could not be priced
        symbol: String,
    },

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Failed to convert between currencies: {0}")]
    CurrencyConversionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_portfolio_display() {
        assert_eq!(
            format!("{}", Error::EmptyPortfolio),
            "Cannot total an empty portfolio"
        );
    }

    #[test]
    fn test_price_not_found_display() {
        let error = Error::PriceNotFound {
            symbol: "XYZ".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "No price available for 'XYZ', directly or via the bridge asset"
        );
    }
}
