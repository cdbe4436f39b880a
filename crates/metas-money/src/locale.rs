//! Localized (pt-BR) money parsing and formatting.
//!
//! Currency strings use the Brazilian convention: `R$ ` prefix, `.` as the
//! thousands separator, `,` as the decimal separator, two fractional digits
//! (`R$ 1.234,56`).
//!
//! Parsing sits on an interactive form-input path, so it degrades to `0.0`
//! on unparsable input instead of returning an error.

use crate::cents::{Cents, CENT_SCALE};

/// Currency prefix for formatted output.
pub const CURRENCY_PREFIX: &str = "R$ ";

/// Upper bound of the valid amount range (major units).
pub const MAX_AMOUNT: f64 = 999_999.99;

/// `true` if the amount lies in the accepted range `[0, 999_999.99]`.
///
/// Out-of-range values are rejected by callers, never clamped.
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && (0.0..=MAX_AMOUNT).contains(&amount)
}

/// Parse a user-entered money string into a decimal amount.
///
/// Accepted forms, tried in order after stripping every character that is
/// not a digit or a `.`/`,` separator:
///
/// 1. Decimal-comma form (`1.234,56`): `.` are thousands separators and are
///    removed; the `,` becomes the decimal point.
/// 2. Plain number (`1234.56` or `1234`).  If the parsed value exceeds
///    999 999, the raw digits are reinterpreted as already-scaled cents and
///    divided by 100 — legacy inputs stored whole-cent strings without any
///    separator.
///
/// Anything unparsable yields `0.0`.  This function never panics.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    if cleaned.contains(',') {
        let normalized = cleaned.replace('.', "").replace(',', ".");
        return normalized.parse::<f64>().unwrap_or(0.0);
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v > 999_999.0 => {
            // Legacy escape hatch: digits are whole cents.
            let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
            digits
                .parse::<i64>()
                .map(|c| Cents::new(c).to_decimal())
                .unwrap_or(0.0)
        }
        Ok(v) => v,
        Err(_) => 0.0,
    }
}

/// Format a decimal amount as a localized two-decimal currency string,
/// e.g. `R$ 1.234,56`.
pub fn format_amount(amount: f64) -> String {
    let cents = Cents::from_decimal(amount).raw();
    let negative = cents < 0;
    let whole = (cents / CENT_SCALE).abs();
    let frac = (cents % CENT_SCALE).abs();

    let mut grouped = String::new();
    let digits = whole.to_string();
    let first_group = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{CURRENCY_PREFIX}{sign}{grouped},{frac:02}")
}

/// Compact currency formatting: `K`/`M` suffix above 1 000 / 1 000 000
/// major units, one decimal place (`R$ 1,5K`).  Below the thresholds this
/// falls back to [`format_amount`].
pub fn format_amount_compact(amount: f64) -> String {
    if !amount.is_finite() {
        return format_amount(0.0);
    }
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        let scaled = amount / 1_000_000.0;
        format!("{CURRENCY_PREFIX}{}M", one_decimal_comma(scaled))
    } else if abs >= 1_000.0 {
        let scaled = amount / 1_000.0;
        format!("{CURRENCY_PREFIX}{}K", one_decimal_comma(scaled))
    } else {
        format_amount(amount)
    }
}

fn one_decimal_comma(value: f64) -> String {
    format!("{value:.1}").replace('.', ",")
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
