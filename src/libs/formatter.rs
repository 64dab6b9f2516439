//! Duration parsing and formatting for flags, status lines and summaries.
//!
//! Durations are written the compact way users type them on the command
//! line: `3s`, `1m30s`, `500ms`, `2h`. A bare number is read as seconds so
//! `--interval 5` keeps working.
//!
//! ## Format Specifications
//!
//! - Whole seconds and up: `45s`, `1m5s`, `2h0m30s`
//! - Below one second: `250ms`
//! - Zero: `0s`
//!
//! ```rust
//! use awaker::libs::formatter::{format_duration, parse_duration};
//! use std::time::Duration;
//!
//! assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
//! assert_eq!(format_duration(&Duration::from_secs(3725)), "1h2m5s");
//! ```

use crate::libs::error::ConfigError;
use std::time::Duration;

/// Parses a duration such as `3s`, `1m30s`, `1.5h`, `250ms` or `10`.
///
/// Units: `h`, `m`, `s`, `ms`, `us`/`µs`, `ns`. Components may repeat and
/// appear in any order; their values are summed.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(input.to_string());
    let text = input.trim();
    if text.is_empty() {
        return Err(invalid());
    }

    if let Ok(seconds) = text.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    let mut total = Duration::ZERO;
    let mut rest = text;
    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).ok_or_else(invalid)?;
        if number_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit() || c == '.').unwrap_or(rest.len());
        let nanos_per_unit: f64 = match &rest[..unit_len] {
            "h" => 3_600e9,
            "m" => 60e9,
            "s" => 1e9,
            "ms" => 1e6,
            "us" | "µs" => 1e3,
            "ns" => 1.0,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];

        total += Duration::from_nanos((value * nanos_per_unit).round() as u64);
    }

    Ok(total)
}

/// Formats a duration truncated to whole seconds, e.g. `1h2m5s`.
///
/// Durations shorter than a second (but not zero) are shown in milliseconds
/// so sub-second intervals remain readable.
pub fn format_duration(duration: &Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs == 0 {
        let millis = duration.as_millis();
        return if millis == 0 { "0s".to_string() } else { format!("{}ms", millis) };
    }

    let hours = total_secs / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Formats an optional run length, `None` meaning "runs until stopped".
pub fn format_run_length(duration: Option<Duration>) -> String {
    match duration {
        Some(duration) => format_duration(&duration),
        None => "unbounded".to_string(),
    }
}
