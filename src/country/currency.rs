// SPDX-License-Identifier: MPL-2.0
//! Currency conversion and price formatting.
//!
//! Rates are a static table relative to GBP and are never refreshed at
//! runtime.

use super::catalog::{Currency, SymbolPosition};
use crate::i18n::catalog::NumberFormat;

/// Units of each currency per 1 GBP.
pub static EXCHANGE_RATES: [(&str, f64); 5] = [
    ("GBP", 1.0),
    ("USD", 1.27),
    ("EUR", 1.15),
    ("AUD", 1.92),
    ("CAD", 1.71),
];

/// Returns the GBP-relative rate for `currency`, if known.
pub fn exchange_rate(currency: &str) -> Option<f64> {
    EXCHANGE_RATES
        .iter()
        .find(|(code, _)| *code == currency)
        .map(|(_, rate)| *rate)
}

/// Converts `amount` between currencies, rounded to the nearest whole unit.
///
/// Unknown currency codes are treated as having a rate of 1.0.
#[must_use]
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    let from_rate = exchange_rate(from).unwrap_or(1.0);
    let to_rate = exchange_rate(to).unwrap_or(1.0);
    (amount / from_rate * to_rate).round()
}

/// Renders `amount` with the currency symbol and locale separators.
///
/// Amounts that are whole after rounding to cents show no decimals; all
/// others show exactly two.
pub fn format_amount(amount: f64, currency: &Currency, number_format: &NumberFormat) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round();
    let negative = amount < 0.0 && cents > 0.0;

    let whole = (cents / 100.0).trunc();
    let fraction = (cents - whole * 100.0) as u64;

    let mut number = group_digits(&format!("{whole:.0}"), number_format.group_separator);
    if fraction != 0 {
        number.push_str(number_format.decimal_separator);
        number.push_str(&format!("{fraction:02}"));
    }

    let sign = if negative { "-" } else { "" };
    match currency.position {
        SymbolPosition::Before => format!("{sign}{}{number}", currency.symbol),
        SymbolPosition::After => format!("{sign}{number} {}", currency.symbol),
    }
}

/// Inserts `separator` between every group of three integer digits.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
