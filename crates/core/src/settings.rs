//! Run configuration for the valuation engine.
//!
//! The original tool kept market and pair coin as module-level globals;
//! here they are an explicit value handed to the services at construction.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BRIDGE_ASSET, DEFAULT_DISPLAY_QUOTE_SUFFIX, DEFAULT_MARKET,
    DEFAULT_REFERENCE_CURRENCY,
};

/// Configuration for one valuation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValuationSettings {
    /// Market identifier the prices are read from (e.g. "binance")
    pub market: String,

    /// Currency all unit prices are expressed in (e.g. "xlm", "usd")
    pub reference_currency: String,

    /// Intermediary asset used when the market does not list a direct pair
    pub bridge_asset: String,

    /// Suffix forming the display-currency pair for the converted total
    pub display_quote_suffix: String,
}

impl ValuationSettings {
    /// Settings with the given reference currency and defaults elsewhere.
    pub fn with_reference_currency(reference_currency: impl Into<String>) -> Self {
        Self {
            reference_currency: reference_currency.into(),
            ..Self::default()
        }
    }
}

impl Default for ValuationSettings {
    fn default() -> Self {
        Self {
            market: DEFAULT_MARKET.to_string(),
            reference_currency: DEFAULT_REFERENCE_CURRENCY.to_string(),
            bridge_asset: DEFAULT_BRIDGE_ASSET.to_string(),
            display_quote_suffix: DEFAULT_DISPLAY_QUOTE_SUFFIX.to_string(),
        }
    }
}
