use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a whole-yen amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: std::num::ParseIntError,
}

/// Normalizes input for amount parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a whole-yen amount.
///
/// Handles comma as thousands separator (e.g. `"20,000,000"`). Used as a clap
/// value parser, so the error message is shown to the user as-is.
pub fn parse_amount(s: &str) -> Result<i64, ParseAmountError> {
    normalize_amount_input(s)
        .parse()
        .map_err(|source| ParseAmountError {
            input: s.to_string(),
            source,
        })
}

/// Formats an amount with comma thousands separators.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a fractional rate as a percentage, e.g. `0.23` as `"23%"`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
