//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for the summary and expense reports.

use std::fmt::Write;

use chrono::NaiveDate;

/// Fallback used when a date format needs fields a plain date lacks
const ISO_DATE: &str = "%Y-%m-%d";

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head.trim_end())
    }
}

/// Format a date with a strftime pattern.
///
/// Patterns that ask for a time or an offset (`%H:%M`, `%z`) cannot be
/// rendered from a date alone; those fall back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format(ISO_DATE).to_string(),
    }
}

/// Whether `format` renders a plain date without error
pub fn is_date_format(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 31) else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(format)).is_ok()
}
