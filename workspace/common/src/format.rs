//! Presentation helpers following Indonesian (`id-ID`) conventions.
//!
//! Amounts are rounded to whole Rupiah and grouped with `.` as the thousands
//! separator. Dates are rendered as `d/m/yyyy`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_PREFIX: &str = "Rp";

/// Groups the integer part of a rounded amount, e.g. `476190` -> `476.190`.
/// The sign is kept.
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Rp 1.234.567`
pub fn format_rupiah(amount: Decimal) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_thousands(amount))
}

/// Parses the date formats the history endpoint is known to emit.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Localized axis label. Unparseable input is shown as received.
pub fn format_date_label(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => {
            tracing::debug!(raw, "Unrecognised date in revenue history, keeping raw text");
            raw.trim().to_string()
        }
    }
}

/// Lossy conversion for plotting.
pub fn to_plot_value(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}
