use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use coinfolio_market_data::{PriceProvider, QuoteResult};

use crate::errors::{Error, Result};
use crate::portfolio::portfolio_model::{Portfolio, PortfolioEntry, PricedEntry};
use crate::settings::ValuationSettings;

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Resolve the reference-currency price and value of one entry.
    async fn resolve_entry(&self, entry: &PortfolioEntry) -> Result<PricedEntry>;

    /// Price every entry in input order, one lookup at a time.
    async fn build_portfolio(&self, entries: &[PortfolioEntry]) -> Result<Portfolio>;

    /// Price every entry with overlapped lookups. Same contract as
    /// [`build_portfolio`](Self::build_portfolio): output order is input
    /// order and the first fatal error aborts the whole aggregation.
    async fn build_portfolio_concurrent(&self, entries: &[PortfolioEntry]) -> Result<Portfolio>;
}

/// Resolves portfolio entries against a pricing provider.
///
/// For each entry the resolver tries, in order:
///
/// 1. the self-pair shortcut (coin == reference currency, no lookup),
/// 2. the direct `{coin}{reference}` pair on the configured market,
/// 3. a two-hop valuation through the bridge asset.
///
/// An unlisted pair is the only recoverable condition; transport failures
/// abort the entry and, through the aggregator, the whole run.
#[derive(Clone)]
pub struct ValuationService {
    provider: Arc<dyn PriceProvider>,
    settings: ValuationSettings,
}

impl ValuationService {
    pub fn new(provider: Arc<dyn PriceProvider>, settings: ValuationSettings) -> Self {
        Self { provider, settings }
    }

    /// Pair symbol for a coin against a quote asset, e.g. ("BTC", "usd")
    /// -> "btcusd".
    fn coin_pair(coin: &str, quote_asset: &str) -> String {
        format!("{}{}", coin.to_lowercase(), quote_asset.to_lowercase())
    }

    /// Two-hop price of `coin` in the reference currency:
    /// `coin->bridge * (1 / reference->bridge)`.
    ///
    /// Both legs are independent and issued concurrently. A missing leg
    /// makes the coin unpriceable and is fatal.
    async fn bridge_unit_price(&self, coin: &str) -> Result<Decimal> {
        let coin_pair = Self::coin_pair(coin, &self.settings.bridge_asset);
        let reference_pair = Self::coin_pair(
            &self.settings.reference_currency,
            &self.settings.bridge_asset,
        );

        debug!(
            "Bridge valuation for {}: {} and {} on {}",
            coin, coin_pair, reference_pair, self.settings.market
        );

        let (coin_lookup, reference_lookup) = tokio::try_join!(
            self.provider.get_pair_price(&self.settings.market, &coin_pair),
            self.provider
                .get_pair_price(&self.settings.market, &reference_pair),
        )?;

        let coin_quote = coin_lookup.found().ok_or_else(|| Error::PriceNotFound {
            symbol: coin.to_string(),
        })?;
        let reference_quote = reference_lookup.found().ok_or_else(|| Error::PriceNotFound {
            symbol: self.settings.reference_currency.clone(),
        })?;

        if reference_quote.price.is_zero() {
            return Err(Error::InvalidExchangeRate(format!(
                "zero {} price for {}",
                self.settings.bridge_asset, self.settings.reference_currency
            )));
        }

        Ok(coin_quote.price * (Decimal::ONE / reference_quote.price))
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn resolve_entry(&self, entry: &PortfolioEntry) -> Result<PricedEntry> {
        // Self-pair shortcut: a coin priced in itself is 1.0 by identity,
        // so skip the meaningless lookup entirely.
        if entry
            .coin
            .eq_ignore_ascii_case(&self.settings.reference_currency)
        {
            debug!("{} is the reference currency, skipping lookup", entry.coin);
            return Ok(PricedEntry::from_entry(entry, Decimal::ONE));
        }

        let pair = Self::coin_pair(&entry.coin, &self.settings.reference_currency);
        match self
            .provider
            .get_pair_price(&self.settings.market, &pair)
            .await?
        {
            QuoteResult::Found(quote) => Ok(PricedEntry::from_entry(entry, quote.price)),
            QuoteResult::NotFound => {
                warn!(
                    "{} does not list {}, trying the {} bridge",
                    self.settings.market, pair, self.settings.bridge_asset
                );
                let unit_price = self.bridge_unit_price(&entry.coin).await?;
                Ok(PricedEntry::from_entry(entry, unit_price))
            }
        }
    }

    async fn build_portfolio(&self, entries: &[PortfolioEntry]) -> Result<Portfolio> {
        let mut priced = Vec::with_capacity(entries.len());
        for entry in entries {
            priced.push(self.resolve_entry(entry).await?);
        }
        Ok(Portfolio::new(priced))
    }

    async fn build_portfolio_concurrent(&self, entries: &[PortfolioEntry]) -> Result<Portfolio> {
        // Entries are independent, so their lookups may overlap;
        // try_join_all keeps the results in input order and aborts on the
        // first fatal error.
        let priced = try_join_all(entries.iter().map(|entry| self.resolve_entry(entry))).await?;
        Ok(Portfolio::new(priced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinfolio_market_data::{MarketDataError, MarketSummary, PairQuote};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider backed by a pair -> price map. Unknown pairs resolve to
    /// `NotFound`; every price lookup bumps a counter.
    struct MockProvider {
        prices: HashMap<String, Decimal>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn new(prices: &[(&str, Decimal)]) -> Self {
            Self {
                prices: prices
                    .iter()
                    .map(|(pair, price)| (pair.to_string(), *price))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_pair_price(
            &self,
            _market: &str,
            pair: &str,
        ) -> std::result::Result<QuoteResult, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(match self.prices.get(pair) {
                Some(price) => QuoteResult::Found(PairQuote::new(pair, *price, "MOCK")),
                None => QuoteResult::NotFound,
            })
        }

        async fn get_market_summary(
            &self,
            market: &str,
        ) -> std::result::Result<MarketSummary, MarketDataError> {
            Ok(MarketSummary {
                market: market.to_string(),
                pairs: self.prices.keys().cloned().collect(),
            })
        }
    }

    /// Provider whose lookups always fail at the transport level.
    struct UnavailableProvider;

    #[async_trait]
    impl PriceProvider for UnavailableProvider {
        fn id(&self) -> &'static str {
            "DOWN"
        }

        async fn get_pair_price(
            &self,
            _market: &str,
            _pair: &str,
        ) -> std::result::Result<QuoteResult, MarketDataError> {
            Err(MarketDataError::ProviderError {
                provider: "DOWN".to_string(),
                message: "connection refused".to_string(),
            })
        }

        async fn get_market_summary(
            &self,
            _market: &str,
        ) -> std::result::Result<MarketSummary, MarketDataError> {
            Err(MarketDataError::ProviderError {
                provider: "DOWN".to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    fn service_with(
        prices: &[(&str, Decimal)],
        reference_currency: &str,
    ) -> (Arc<MockProvider>, ValuationService) {
        let provider = Arc::new(MockProvider::new(prices));
        let service = ValuationService::new(
            provider.clone(),
            ValuationSettings::with_reference_currency(reference_currency),
        );
        (provider, service)
    }

    #[tokio::test]
    async fn test_direct_lookup_value_is_quantity_times_price() {
        // Scenario A: 2 BTC at a direct quote of 30000 usd.
        let (_, service) = service_with(&[("btcusd", dec!(30000.0))], "usd");
        let entry = PortfolioEntry::new("BTC", dec!(2), "coldwallet");

        let priced = service.resolve_entry(&entry).await.unwrap();
        assert_eq!(priced.unit_price, dec!(30000.0));
        assert_eq!(priced.value, dec!(60000.0));

        let portfolio = service.build_portfolio(&[entry]).await.unwrap();
        assert_eq!(portfolio.total_value().unwrap(), dec!(60000.0));
    }

    #[tokio::test]
    async fn test_self_pair_shortcut_skips_lookup() {
        // Scenario B: holding the reference currency itself.
        let (provider, service) = service_with(&[], "usd");
        let entry = PortfolioEntry::new("usd", dec!(5), "bank");

        let priced = service.resolve_entry(&entry).await.unwrap();
        assert_eq!(priced.unit_price, Decimal::ONE);
        assert_eq!(priced.value, dec!(5));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_self_pair_shortcut_is_case_insensitive() {
        let (provider, service) = service_with(&[], "usd");
        let entry = PortfolioEntry::new("USD", dec!(7), "bank");

        let priced = service.resolve_entry(&entry).await.unwrap();
        assert_eq!(priced.value, dec!(7));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bridge_fallback_composes_two_quotes() {
        // Scenario C: XYZ has no direct usd pair; price it through btc.
        let (provider, service) = service_with(
            &[("xyzbtc", dec!(0.001)), ("usdbtc", dec!(0.00003))],
            "usd",
        );
        let entry = PortfolioEntry::new("XYZ", dec!(10), "exchange");

        let priced = service.resolve_entry(&entry).await.unwrap();
        let expected_unit = dec!(0.001) * (Decimal::ONE / dec!(0.00003));
        assert_eq!(priced.unit_price, expected_unit);
        assert_eq!(priced.value, dec!(10) * expected_unit);
        // Roughly 33.33 per unit, 333.3 in total.
        assert!(priced.unit_price > dec!(33.3) && priced.unit_price < dec!(33.4));

        // One direct miss plus two bridge legs.
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_bridge_with_missing_leg_is_fatal() {
        // Direct pair missing and no usdbtc leg either.
        let (_, service) = service_with(&[("xyzbtc", dec!(0.001))], "usd");
        let entry = PortfolioEntry::new("XYZ", dec!(10), "exchange");

        let result = service.resolve_entry(&entry).await;
        assert!(matches!(result, Err(Error::PriceNotFound { .. })));
    }

    #[tokio::test]
    async fn test_zero_reference_bridge_price_is_rejected() {
        let (_, service) =
            service_with(&[("xyzbtc", dec!(0.001)), ("usdbtc", dec!(0))], "usd");
        let entry = PortfolioEntry::new("XYZ", dec!(10), "exchange");

        let result = service.resolve_entry(&entry).await;
        assert!(matches!(result, Err(Error::InvalidExchangeRate(_))));
    }

    #[tokio::test]
    async fn test_provider_failure_aborts_aggregation() {
        let service = ValuationService::new(
            Arc::new(UnavailableProvider),
            ValuationSettings::with_reference_currency("usd"),
        );
        let entries = vec![
            PortfolioEntry::new("BTC", dec!(1), "coldwallet"),
            PortfolioEntry::new("ETH", dec!(2), "hotwallet"),
        ];

        let result = service.build_portfolio(&entries).await;
        assert!(matches!(result, Err(Error::MarketData(_))));

        let result = service.build_portfolio_concurrent(&entries).await;
        assert!(matches!(result, Err(Error::MarketData(_))));
    }

    #[tokio::test]
    async fn test_concurrent_build_matches_sequential_and_preserves_order() {
        let (_, service) = service_with(
            &[
                ("btcusd", dec!(30000.0)),
                ("ethusd", dec!(2000.0)),
                ("xlmusd", dec!(0.1)),
            ],
            "usd",
        );
        let entries = vec![
            PortfolioEntry::new("BTC", dec!(2), "coldwallet"),
            PortfolioEntry::new("ETH", dec!(10), "hotwallet"),
            PortfolioEntry::new("XLM", dec!(1000), "exchange"),
        ];

        let sequential = service.build_portfolio(&entries).await.unwrap();
        let concurrent = service.build_portfolio_concurrent(&entries).await.unwrap();

        let coins: Vec<&str> = concurrent.entries.iter().map(|e| e.coin.as_str()).collect();
        assert_eq!(coins, vec!["BTC", "ETH", "XLM"]);
        assert_eq!(sequential.entries, concurrent.entries);
        assert_eq!(
            sequential.total_value().unwrap(),
            concurrent.total_value().unwrap()
        );
    }
}
