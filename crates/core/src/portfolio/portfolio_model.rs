use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One holding as read from the portfolio source: a coin symbol, how much of
/// it is held, and where. Immutable once read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Coin symbol (e.g. "BTC")
    pub coin: String,

    /// Quantity held, never negative
    pub quantity: Decimal,

    /// Free-text storage location (e.g. "coldwallet")
    pub storage_location: String,
}

impl PortfolioEntry {
    pub fn new(
        coin: impl Into<String>,
        quantity: Decimal,
        storage_location: impl Into<String>,
    ) -> Self {
        Self {
            coin: coin.into(),
            quantity,
            storage_location: storage_location.into(),
        }
    }
}

/// A portfolio entry with its resolved unit price and value in the
/// reference currency. Derived, never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedEntry {
    /// Coin symbol
    pub coin: String,

    /// Quantity held
    pub quantity: Decimal,

    /// Free-text storage location
    pub storage_location: String,

    /// Price of one unit, in the reference currency
    pub unit_price: Decimal,

    /// quantity * unit_price
    pub value: Decimal,
}

impl PricedEntry {
    /// Price an entry at the given unit price.
    pub fn from_entry(entry: &PortfolioEntry, unit_price: Decimal) -> Self {
        Self {
            coin: entry.coin.clone(),
            quantity: entry.quantity,
            storage_location: entry.storage_location.clone(),
            unit_price,
            value: entry.quantity * unit_price,
        }
    }
}

/// An ordered sequence of priced entries. Order is the input order,
/// preserved for display; totals do not depend on it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub entries: Vec<PricedEntry>,
}

impl Portfolio {
    pub fn new(entries: Vec<PricedEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry values in the reference currency.
    ///
    /// Fails with [`Error::EmptyPortfolio`] when there are no entries.
    /// No implicit zero: an empty total would more likely mean a broken
    /// upstream loader than an actually empty portfolio.
    pub fn total_value(&self) -> Result<Decimal> {
        if self.entries.is_empty() {
            return Err(Error::EmptyPortfolio);
        }
        Ok(self.entries.iter().map(|e| e.value).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn priced(coin: &str, quantity: Decimal, unit_price: Decimal) -> PricedEntry {
        PricedEntry::from_entry(&PortfolioEntry::new(coin, quantity, "wallet"), unit_price)
    }

    #[test]
    fn test_priced_entry_value_is_quantity_times_price() {
        let entry = priced("BTC", dec!(2), dec!(30000.0));
        assert_eq!(entry.unit_price, dec!(30000.0));
        assert_eq!(entry.value, dec!(60000.0));
    }

    #[test]
    fn test_total_value_sums_entries() {
        let portfolio = Portfolio::new(vec![
            priced("BTC", dec!(2), dec!(30000.0)),
            priced("ETH", dec!(10), dec!(2000.0)),
        ]);
        assert_eq!(portfolio.total_value().unwrap(), dec!(80000.0));
    }

    #[test]
    fn test_total_value_is_order_independent() {
        let a = priced("BTC", dec!(0.5), dec!(30000.0));
        let b = priced("ETH", dec!(3), dec!(2000.0));
        let c = priced("XLM", dec!(1000), dec!(0.1));

        let forward = Portfolio::new(vec![a.clone(), b.clone(), c.clone()]);
        let reversed = Portfolio::new(vec![c, b, a]);
        assert_eq!(
            forward.total_value().unwrap(),
            reversed.total_value().unwrap()
        );
    }

    #[test]
    fn test_total_value_of_empty_portfolio_fails() {
        let portfolio = Portfolio::default();
        assert!(matches!(
            portfolio.total_value(),
            Err(Error::EmptyPortfolio)
        ));
    }
}
