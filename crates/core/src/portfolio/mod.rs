//! Portfolio entries, priced holdings, and the valuation services.

mod portfolio_model;
mod valuation_service;

pub use portfolio_model::{Portfolio, PortfolioEntry, PricedEntry};
pub use valuation_service::{ValuationService, ValuationServiceTrait};
