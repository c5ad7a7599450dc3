//! Console rendering of a valued portfolio.

use chrono::Local;
use rust_decimal::Decimal;

use coinfolio_core::Portfolio;

const RULE: &str = "-----------------------------------------------------------------------";

/// Ruled table of priced entries, prices to 8 decimal places.
pub fn print_portfolio(portfolio: &Portfolio, reference_currency: &str) {
    println!("{}", RULE);
    println!(
        "{:<8} {:>12} {:>16} {:>16}  {}",
        "Coin",
        "Quantity",
        format!("{} value", reference_currency.to_uppercase()),
        "Total Value",
        "Location"
    );
    println!("{}", RULE);
    for entry in &portfolio.entries {
        println!(
            "{:<8} {:>12} {:>16.8} {:>16.8}  {}",
            entry.coin, entry.quantity, entry.unit_price, entry.value, entry.storage_location
        );
    }
    println!("{}", RULE);
}

pub fn print_total(total: Decimal, reference_currency: &str) {
    println!("Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Total {} value: {}", reference_currency, total);
}

pub fn print_display_value(value: Decimal, display_pair: &str) {
    println!("{} value: {:.2}", display_pair.to_uppercase(), value);
}
