//! Default run configuration values.

/// Market the prices are read from.
pub const DEFAULT_MARKET: &str = "binance";

/// Currency all unit prices are expressed in (the "paircoin").
pub const DEFAULT_REFERENCE_CURRENCY: &str = "xlm";

/// Intermediary asset for two-hop valuations of unlisted pairs.
pub const DEFAULT_BRIDGE_ASSET: &str = "btc";

/// Suffix appended to the reference currency to form the display-currency
/// quote pair (e.g. "xlm" + "usdt").
pub const DEFAULT_DISPLAY_QUOTE_SUFFIX: &str = "usdt";
