//! Display-currency conversion of the portfolio total.

mod conversion_service;

pub use conversion_service::{CurrencyConversionService, CurrencyConversionServiceTrait};
