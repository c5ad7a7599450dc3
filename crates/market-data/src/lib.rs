//! Coinfolio Market Data Crate
//!
//! This crate provides the pricing client used by the valuation engine.
//! It knows how to ask a cryptowat.ch-style API for the price of a single
//! trading pair on a single market, and how to interpret the answer.
//!
//! # Overview
//!
//! A price lookup has exactly three outcomes:
//!
//! - [`QuoteResult::Found`] - the market lists the pair and returned a price
//! - [`QuoteResult::NotFound`] - the market does not list the pair; callers
//!   may fall back to an indirect (bridge) valuation
//! - [`MarketDataError`] - transport or parse failure; never interpreted as
//!   "pair missing" and always propagated
//!
//! # Core Types
//!
//! - [`PriceProvider`] - trait implemented by pricing backends
//! - [`CryptowatchProvider`] - the HTTP implementation
//! - [`PairQuote`] - a resolved price for one pair
//! - [`MarketSummary`] - the pair listing of one market

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{MarketSummary, PairQuote, QuoteResult};
pub use provider::cryptowatch::{CryptowatchProvider, DEFAULT_BASE_URL};
pub use provider::PriceProvider;
