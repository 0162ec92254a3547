//! Custom error types for the financial dashboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed input file (missing columns, unreadable CSV)
    #[error("Import error: {0}")]
    Import(String),

    /// A single data row could not be parsed
    #[error("Invalid {field} on row {row}: '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// Validation errors for loaded records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Export errors (CSV and PDF)
    #[error("Export error: {0}")]
    Export(String),
}

impl DashboardError {
    /// Create an error for a field that failed to parse on a given data row
    pub fn invalid_field(row: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            row,
            field,
            value: value.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
