//! Locale-stable rendering of numbers, percentages, and dates.
//!
//! Output is deterministic regardless of environment: thousands grouping
//! uses an ordinary space and dates render as `DD.MM.YYYY`, so the same
//! report produces the same strings on every host.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::core::{FunnelError, FunnelResult, RawDate};

/// Render a number with space-grouped thousands and a fixed number of
/// decimal places.
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Fixed-point percentage with a trailing `%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// `DD.MM.YYYY`, zero-padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `DD.MM.YYYY HH:MM`, 24-hour, zero-padded.
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    format!(
        "{} {}",
        format_date(value.date_naive()),
        value.format("%H:%M")
    )
}

/// `"<from> - <to>"` with both ends as `DD.MM.YYYY`.
pub fn format_period(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} - {}", format_date(from), format_date(to))
}

/// Parse a raw date value: epoch milliseconds, RFC 3339, a bare
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD`.
///
/// Anything else is a hard failure; dates are never silently substituted.
pub fn parse_flexible(value: &RawDate) -> FunnelResult<DateTime<Utc>> {
    match value {
        RawDate::Millis(ms) => Utc
            .timestamp_millis_opt(*ms)
            .single()
            .ok_or_else(|| FunnelError::InvalidDate {
                value: ms.to_string(),
            }),
        RawDate::Text(s) => parse_text_date(s),
    }
}

fn parse_text_date(s: &str) -> FunnelResult<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        // Midnight UTC; the date is the only information carried.
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }
    Err(FunnelError::InvalidDate {
        value: s.to_string(),
    })
}

/// Parse-then-render convenience for raw date values; invalid input
/// propagates to the caller.
pub fn format_raw_date(value: &RawDate) -> FunnelResult<String> {
    Ok(format_date(parse_flexible(value)?.date_naive()))
}
