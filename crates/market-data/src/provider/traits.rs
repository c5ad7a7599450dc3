//! Price provider trait definition.
//!
//! This module defines the `PriceProvider` trait that all pricing
//! backends must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{MarketSummary, QuoteResult};

/// Trait for pricing backends.
///
/// Implement this trait to add support for a new pricing source. The
/// valuation engine only depends on this trait, which also makes it the
/// seam for mock providers in tests.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinfolio_market_data::{MarketDataError, MarketSummary, PriceProvider, QuoteResult};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl PriceProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement lookup methods
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "CRYPTOWATCH". Used for logging
    /// and as the `source` field of returned quotes.
    fn id(&self) -> &'static str;

    /// Fetch the current price of one pair on one market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market identifier (e.g. "binance")
    /// * `pair` - Pair symbol, base coin plus quote currency (e.g. "btcusd")
    ///
    /// # Returns
    ///
    /// [`QuoteResult::Found`] with the price, [`QuoteResult::NotFound`] when
    /// the market explicitly reports the pair as unknown, or a
    /// [`MarketDataError`] on transport or parse failure.
    async fn get_pair_price(
        &self,
        market: &str,
        pair: &str,
    ) -> Result<QuoteResult, MarketDataError>;

    /// Fetch the pair listing of one market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market identifier (e.g. "binance")
    ///
    /// # Returns
    ///
    /// The market summary, or a [`MarketDataError`] when the market is
    /// unknown or the request failed.
    async fn get_market_summary(&self, market: &str) -> Result<MarketSummary, MarketDataError>;
}
