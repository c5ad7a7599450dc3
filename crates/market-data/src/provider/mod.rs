//! Pricing backends.

pub mod cryptowatch;
mod traits;

pub use traits::PriceProvider;
