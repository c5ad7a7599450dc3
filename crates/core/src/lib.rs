//! Coinfolio Core - the portfolio valuation engine.
//!
//! Given a list of (coin, quantity, storage-location) entries and a pricing
//! provider, this crate resolves each coin's price against a reference
//! currency - directly, or through a two-hop bridge when the market does not
//! list the pair - aggregates the entries into a portfolio total, and
//! converts the total to a secondary display currency.
//!
//! It is transport-agnostic: all price lookups go through the
//! [`PriceProvider`](coinfolio_market_data::PriceProvider) trait from the
//! `coinfolio-market-data` crate.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod settings;

// Re-export common types from the portfolio and fx modules
pub use fx::{CurrencyConversionService, CurrencyConversionServiceTrait};
pub use portfolio::{
    Portfolio, PortfolioEntry, PricedEntry, ValuationService, ValuationServiceTrait,
};
pub use settings::ValuationSettings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
