use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use coinfolio_market_data::{PriceProvider, QuoteResult};

use crate::errors::{Error, Result};
use crate::settings::ValuationSettings;

#[async_trait]
pub trait CurrencyConversionServiceTrait: Send + Sync {
    /// Express a reference-currency total in the display currency.
    async fn convert_total(&self, total: Decimal) -> Result<Decimal>;
}

/// Converts the aggregate total into a secondary display currency by
/// fetching one additional reference price (e.g. `xlmusdt`).
///
/// A failure here is fatal for the conversion step only: the
/// reference-currency total the caller already holds stays valid and may
/// still be displayed.
#[derive(Clone)]
pub struct CurrencyConversionService {
    provider: Arc<dyn PriceProvider>,
    settings: ValuationSettings,
}

impl CurrencyConversionService {
    pub fn new(provider: Arc<dyn PriceProvider>, settings: ValuationSettings) -> Self {
        Self { provider, settings }
    }

    fn display_pair(&self) -> String {
        format!(
            "{}{}",
            self.settings.reference_currency.to_lowercase(),
            self.settings.display_quote_suffix.to_lowercase()
        )
    }
}

#[async_trait]
impl CurrencyConversionServiceTrait for CurrencyConversionService {
    async fn convert_total(&self, total: Decimal) -> Result<Decimal> {
        let pair = self.display_pair();
        debug!("Converting total via {}", pair);

        match self
            .provider
            .get_pair_price(&self.settings.market, &pair)
            .await?
        {
            QuoteResult::Found(quote) => Ok(total * quote.price),
            QuoteResult::NotFound => Err(Error::CurrencyConversionFailed(format!(
                "{} does not list {}",
                self.settings.market, pair
            ))),
        }
    }
}
