//! Error types for the market data crate.
//!
//! Every variant here is fatal from the caller's point of view: a missing
//! pair is *not* an error (see [`QuoteResult::NotFound`](crate::QuoteResult))
//! but transport and parse failures are, and the valuation engine must not
//! substitute a value for them.

use thiserror::Error;

/// Errors that can occur while talking to a pricing backend.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered but the body could not be interpreted.
    /// Malformed JSON, a missing `result` object, an unparsable price.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A provider-specific failure, e.g. a non-success HTTP status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },
}
