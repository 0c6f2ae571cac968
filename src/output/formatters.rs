//! Reusable formatting utilities for CLI output
//!
//! Timestamps from the API are Unix epoch milliseconds; durations are seconds.

use std::borrow::Cow;

use chrono::{DateTime, Local};

/// Format epoch milliseconds as a local date/time string.
///
/// Returns "N/A" if the timestamp is missing, zero or out of range.
///
/// # Example output
/// `01/15/2025 14:30 PST`
pub fn format_timestamp_local(millis: Option<i64>) -> String {
    let Some(millis) = millis.filter(|m| *m != 0) else {
        return "N/A".to_string();
    };

    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            let tz = offset_to_tz_abbrev(local.offset().local_minus_utc());
            format!("{} {}", local.format("%m/%d/%Y %H:%M"), tz)
        }
        None => "N/A".to_string(),
    }
}

/// Convert a UTC offset (seconds) to a timezone abbreviation.
///
/// Uncommon offsets fall back to `UTC+N`.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> Cow<'static, str> {
    let abbrev = match offset_secs / 3600 {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        -4 => "AST",
        -3 => "ART",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        3 => "MSK",
        9 => "JST",
        10 => "AEST",
        12 => "NZST",
        hours => return Cow::Owned(format!("UTC{:+}", hours)),
    };
    Cow::Borrowed(abbrev)
}

/// Format a duration in seconds.
///
/// # Example output
/// - `2h 15m 30s`
/// - `5m 10s`
/// - `45s`
pub fn format_duration(seconds: Option<i64>) -> String {
    let Some(secs) = seconds.filter(|s| *s > 0) else {
        return "N/A".to_string();
    };

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}
