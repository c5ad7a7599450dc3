mod display;
mod loader;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use coinfolio_core::{
    CurrencyConversionService, CurrencyConversionServiceTrait, ValuationService,
    ValuationServiceTrait, ValuationSettings,
};
use coinfolio_market_data::{CryptowatchProvider, PriceProvider};

#[derive(Parser)]
#[command(name = "coinfolio", version, about = "Price a crypto portfolio against a reference currency")]
struct Cli {
    /// Portfolio file: one `coin, quantity, storage` record per line
    #[arg(short, long, default_value = "currency.txt", env = "COINFOLIO_FILE")]
    file: PathBuf,

    /// Market to read prices from
    #[arg(short, long, default_value = "binance", env = "COINFOLIO_MARKET")]
    market: String,

    /// Reference currency all values are expressed in
    #[arg(short = 'c', long, default_value = "xlm", env = "COINFOLIO_CURRENCY")]
    currency: String,

    /// Bridge asset for coins without a direct reference pair
    #[arg(long, default_value = "btc", env = "COINFOLIO_BRIDGE")]
    bridge: String,

    /// Suffix forming the display-currency pair for the converted total
    #[arg(long, default_value = "usdt", env = "COINFOLIO_DISPLAY_SUFFIX")]
    display_suffix: String,

    /// Pricing API base URL
    #[arg(long, default_value = coinfolio_market_data::DEFAULT_BASE_URL, env = "COINFOLIO_BASE_URL")]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Price the portfolio and print the totals (default)
    Value {
        /// Resolve entries one at a time instead of overlapping lookups
        #[arg(long)]
        sequential: bool,
    },
    /// List the pairs the configured market offers
    Markets,
}

fn init_tracing() {
    let log_format = std::env::var("COINFOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let provider: Arc<dyn PriceProvider> = Arc::new(CryptowatchProvider::new(&cli.base_url));
    let settings = ValuationSettings {
        market: cli.market.clone(),
        reference_currency: cli.currency.clone(),
        bridge_asset: cli.bridge.clone(),
        display_quote_suffix: cli.display_suffix.clone(),
    };

    match cli.command.unwrap_or(Command::Value { sequential: false }) {
        Command::Value { sequential } => {
            run_valuation(&cli.file, provider, settings, sequential).await
        }
        Command::Markets => list_markets(provider, &settings).await,
    }
}

async fn run_valuation(
    file: &Path,
    provider: Arc<dyn PriceProvider>,
    settings: ValuationSettings,
    sequential: bool,
) -> Result<()> {
    let entries = loader::load_portfolio_file(file)?;
    if entries.is_empty() {
        bail!("no portfolio entries in {}", file.display());
    }

    let valuation = ValuationService::new(provider.clone(), settings.clone());
    let portfolio = if sequential {
        valuation.build_portfolio(&entries).await?
    } else {
        valuation.build_portfolio_concurrent(&entries).await?
    };

    let total = portfolio.total_value()?;
    display::print_portfolio(&portfolio, &settings.reference_currency);
    display::print_total(total, &settings.reference_currency);

    // The reference-currency total above stays valid even when the
    // display-currency quote is unavailable.
    let conversion = CurrencyConversionService::new(provider, settings.clone());
    match conversion.convert_total(total).await {
        Ok(display_value) => {
            display::print_display_value(display_value, &settings.display_quote_suffix)
        }
        Err(e) => tracing::warn!("display-currency conversion unavailable: {}", e),
    }

    Ok(())
}

async fn list_markets(provider: Arc<dyn PriceProvider>, settings: &ValuationSettings) -> Result<()> {
    let summary = provider.get_market_summary(&settings.market).await?;
    println!("{} lists {} pairs:", summary.market, summary.pairs.len());
    for pair in &summary.pairs {
        println!("{}", pair);
    }
    Ok(())
}
