//! Utility functions and helpers for rendering

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a string of digits with thousands separators
pub fn format_number(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// How monetary amounts are laid out
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyFormat {
    pub decimal_places: u32,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub symbol_before: bool,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            symbol_before: true,
        }
    }
}

/// Symbol for a currency code, or the code itself when unknown
pub fn currency_symbol(code: &str) -> &str {
    match code.to_uppercase().as_str() {
        "USD" | "CAD" | "AUD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        _ => code,
    }
}

impl MoneyFormat {
    /// Format the magnitude of an amount without sign or symbol
    pub fn format_magnitude(&self, amount: Decimal) -> String {
        let rounded = amount
            .abs()
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        let text = rounded.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (text, String::new()),
        };

        let mut out = format_number(&int_part, &self.thousands_separator);
        if self.decimal_places > 0 {
            let mut frac = frac_part;
            while frac.len() < self.decimal_places as usize {
                frac.push('0');
            }
            out.push_str(&self.decimal_separator);
            out.push_str(&frac);
        }
        out
    }

    /// Format an amount with currency symbol, e.g. `-$1,234.50`
    pub fn format(&self, amount: Decimal, currency: &str) -> String {
        let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
        let symbol = currency_symbol(currency);
        let magnitude = self.format_magnitude(amount);
        if self.symbol_before {
            format!("{}{}{}", sign, symbol, magnitude)
        } else {
            format!("{}{} {}", sign, magnitude, symbol)
        }
    }

    /// Format an amount with an explicit `+` for credits
    pub fn format_signed(&self, amount: Decimal, currency: &str) -> String {
        if amount.is_sign_positive() && !amount.is_zero() {
            format!("+{}", self.format(amount, currency))
        } else {
            self.format(amount, currency)
        }
    }
}

/// Long date, e.g. "October 28, 2023"
pub fn format_long_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

/// Clock time, e.g. "2:00 PM"
pub fn format_time(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Short form of a calendar day, e.g. "Oct 28"
pub fn format_day(date: &NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Escape text for safe inclusion in HTML content and attributes
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Capitalize the first letter ("processing" -> "Processing")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
