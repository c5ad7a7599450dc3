//! Data models for price lookups.

mod market;
mod quote;

pub use market::MarketSummary;
pub use quote::{PairQuote, QuoteResult};
