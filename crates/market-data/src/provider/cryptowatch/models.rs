//! Wire models for the Cryptowatch REST API.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /markets/{market}/{pair}/price`.
///
/// Successful lookups carry a `result` object; unknown pairs come back with
/// an `error` field instead. Both fields are optional so that either shape
/// deserializes and the provider can decide what the body means.
#[derive(Debug, Deserialize)]
pub(super) struct PriceResponse {
    pub result: Option<PriceResult>,
    pub error: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PriceResult {
    pub price: Decimal,
}

/// Body of `GET /markets/{market}`.
#[derive(Debug, Deserialize)]
pub(super) struct MarketResponse {
    pub result: Option<Vec<MarketPair>>,
    pub error: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MarketPair {
    pub pair: String,
}
