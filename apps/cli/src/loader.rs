//! Portfolio file loader.
//!
//! Reads the `currency.txt`-style record format: one holding per line,
//! three comma-separated fields (coin symbol, quantity, storage location),
//! no header. Whitespace around fields is ignored.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

use coinfolio_core::PortfolioEntry;

pub fn load_portfolio_file(path: &Path) -> Result<Vec<PortfolioEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open portfolio file {}", path.display()))?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record =
            record.with_context(|| format!("{}:{}: invalid record", path.display(), line))?;

        if record.len() != 3 {
            bail!(
                "{}:{}: expected 3 fields (coin, quantity, storage), found {}",
                path.display(),
                line,
                record.len()
            );
        }

        let quantity = Decimal::from_str(&record[1]).with_context(|| {
            format!(
                "{}:{}: invalid quantity '{}' for {}",
                path.display(),
                line,
                &record[1],
                &record[0]
            )
        })?;

        entries.push(PortfolioEntry::new(&record[0], quantity, &record[2]));
    }

    Ok(entries)
}
