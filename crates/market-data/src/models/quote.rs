use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved price for one trading pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairQuote {
    /// The pair the price belongs to (e.g. "btcusd")
    pub pair: String,

    /// Last price, in the quote currency of the pair
    pub price: Decimal,

    /// When the quote was fetched
    pub timestamp: DateTime<Utc>,

    /// Source of the quote (e.g. "CRYPTOWATCH")
    pub source: String,
}

impl PairQuote {
    /// Create a new quote stamped with the current time.
    pub fn new(pair: impl Into<String>, price: Decimal, source: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            price,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }
}

/// The parsed outcome of a price lookup.
///
/// There are no partial states: either the market returned a price, or it
/// explicitly reported that it does not list the pair. Transport and parse
/// failures are a separate, fatal error
/// ([`MarketDataError`](crate::MarketDataError)) and never collapse into
/// `NotFound`.
#[derive(Clone, Debug)]
pub enum QuoteResult {
    /// The market lists the pair and returned a price.
    Found(PairQuote),

    /// The market answered with an explicit error body for this pair.
    /// Recoverable: callers may try an indirect valuation instead.
    NotFound,
}

impl QuoteResult {
    /// Returns the quote if one was found.
    pub fn found(self) -> Option<PairQuote> {
        match self {
            QuoteResult::Found(quote) => Some(quote),
            QuoteResult::NotFound => None,
        }
    }

    /// True when the lookup resolved to a price.
    pub fn is_found(&self) -> bool {
        matches!(self, QuoteResult::Found(_))
    }
}
