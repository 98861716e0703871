use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseMoneyError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for money parsing: trims whitespace and removes commas (thousands separator).
fn normalize_money_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a money [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and an
/// optional leading `$`. Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid.
pub fn parse_money(s: &str) -> Result<Decimal, ParseMoneyError> {
    let normalized = normalize_money_input(s);
    let normalized = normalized.strip_prefix('$').unwrap_or(&normalized);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseMoneyError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats a money amount as `$1,234.56`.
///
/// Amounts are rounded to whole cents and the integer part is grouped in
/// threes. Negative amounts carry a leading minus sign.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();
    let (whole, cents) = match text.split_once('.') {
        Some((whole, frac)) => (whole.to_string(), format!("{frac:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (idx, digit) in whole.chars().enumerate() {
        let remaining = whole.len() - idx;
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}
