//! Cryptowatch provider for spot pair prices.
//!
//! This provider fetches current pair prices from a cryptowat.ch-style REST
//! API:
//!
//! - `GET {base}/markets/{market}/{pair}/price` for a single price
//! - `GET {base}/markets/{market}` for the pair listing of a market
//!
//! A body carrying an `error` field means the market does not list the pair
//! and maps to [`QuoteResult::NotFound`]; transport and parse failures are
//! surfaced as errors and never interpreted as a missing pair.

mod models;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{MarketSummary, PairQuote, QuoteResult};
use crate::provider::PriceProvider;

use models::{MarketResponse, PriceResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "CRYPTOWATCH";

/// Public cryptowat.ch endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.cryptowat.ch";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cryptowatch pricing provider.
///
/// Holds one pooled [`Client`]; connection reuse across lookups is an
/// optimization, not a correctness requirement.
///
/// # Example
///
/// ```ignore
/// use coinfolio_market_data::CryptowatchProvider;
///
/// let provider = CryptowatchProvider::default();
/// let quote = provider.get_pair_price("binance", "btcusd").await?;
/// ```
pub struct CryptowatchProvider {
    client: Client,
    base_url: String,
}

impl CryptowatchProvider {
    /// Create a provider against a custom base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_body(&self, url: &str) -> Result<String, MarketDataError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }

    fn malformed(message: impl Into<String>) -> MarketDataError {
        MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }
}

impl Default for CryptowatchProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PriceProvider for CryptowatchProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_pair_price(
        &self,
        market: &str,
        pair: &str,
    ) -> Result<QuoteResult, MarketDataError> {
        let url = format!("{}/markets/{}/{}/price", self.base_url, market, pair);
        let body = self.get_body(&url).await?;

        let parsed: PriceResponse =
            serde_json::from_str(&body).map_err(|e| Self::malformed(e.to_string()))?;

        // An explicit error body means the market does not list this pair.
        if parsed.error.is_some() {
            debug!("{}: pair {} not listed on {}", PROVIDER_ID, pair, market);
            return Ok(QuoteResult::NotFound);
        }

        let result = parsed
            .result
            .ok_or_else(|| Self::malformed("missing result object"))?;

        Ok(QuoteResult::Found(PairQuote::new(
            pair,
            result.price,
            PROVIDER_ID,
        )))
    }

    async fn get_market_summary(&self, market: &str) -> Result<MarketSummary, MarketDataError> {
        let url = format!("{}/markets/{}", self.base_url, market);
        let body = self.get_body(&url).await?;

        let parsed: MarketResponse =
            serde_json::from_str(&body).map_err(|e| Self::malformed(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: error.to_string(),
            });
        }

        let entries = parsed
            .result
            .ok_or_else(|| Self::malformed("missing result object"))?;

        Ok(MarketSummary {
            market: market.to_string(),
            pairs: entries.into_iter().map(|e| e.pair).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = CryptowatchProvider::default();
        assert_eq!(provider.id(), "CRYPTOWATCH");
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let provider = CryptowatchProvider::new("https://api.cryptowat.ch/");
        assert_eq!(provider.base_url, "https://api.cryptowat.ch");
    }

    #[test]
    fn test_price_body_parses() {
        let parsed: PriceResponse = serde_json::from_str(r#"{"result":{"price":30000.0}}"#)
            .expect("price body should parse");
        assert!(parsed.error.is_none());
        assert_eq!(parsed.result.unwrap().price, dec!(30000.0));
    }

    #[test]
    fn test_error_body_parses() {
        let parsed: PriceResponse =
            serde_json::from_str(r#"{"error":"Instrument not found"}"#).expect("should parse");
        assert!(parsed.error.is_some());
        assert!(parsed.result.is_none());
    }

    #[test]
    fn test_market_body_parses() {
        let parsed: MarketResponse = serde_json::from_str(
            r#"{"result":[{"id":1,"exchange":"binance","pair":"btcusd","active":true}]}"#,
        )
        .expect("market body should parse");
        let pairs: Vec<String> = parsed.result.unwrap().into_iter().map(|e| e.pair).collect();
        assert_eq!(pairs, vec!["btcusd".to_string()]);
    }
}
