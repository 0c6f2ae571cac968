//! Common display utilities and helpers

use chrono::DateTime;

/// Shown in table cells for values the API left out
pub const PLACEHOLDER: &str = "--";

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// First line of a multi-line message
pub fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}

/// Format epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`
pub fn format_as_iso_datetime(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Owned value or the placeholder
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
