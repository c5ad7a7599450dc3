use serde::{Deserialize, Serialize};

/// The pair listing for one market, as returned by the generic market
/// lookup. Used for discovery (e.g. the CLI `markets` command), not by the
/// valuation engine itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketSummary {
    /// Market identifier (e.g. "binance")
    pub market: String,

    /// Pairs the market lists, in the order the provider returned them
    pub pairs: Vec<String>,
}

impl MarketSummary {
    /// True when the market lists the given pair.
    pub fn has_pair(&self, pair: &str) -> bool {
        self.pairs.iter().any(|p| p == pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_pair() {
        let summary = MarketSummary {
            market: "binance".to_string(),
            pairs: vec!["btcusd".to_string(), "ethusd".to_string()],
        };
        assert!(summary.has_pair("btcusd"));
        assert!(!summary.has_pair("xlmusd"));
    }
}
