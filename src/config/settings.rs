//! User settings for the financial dashboard
//!
//! Manages presentation preferences: currency symbol, date format, the
//! description length limit of the report table, the trailing report image
//! and the period shown when none is given.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::display::is_date_format;
use crate::error::DashboardError;
use crate::models::PeriodFilter;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for tables and reports (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Descriptions longer than this are truncated in tables
    #[serde(default = "default_description_max_len")]
    pub description_max_len: usize,

    /// Image appended to the end of the PDF report, if it exists
    #[serde(default = "default_trailing_image")]
    pub trailing_image: PathBuf,

    /// Period used when no month is given ("all" or "YYYY-MM")
    #[serde(default = "default_period")]
    pub default_period: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_description_max_len() -> usize {
    30
}

fn default_trailing_image() -> PathBuf {
    PathBuf::from("image.png")
}

fn default_period() -> String {
    "all".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            description_max_len: default_description_max_len(),
            trailing_image: default_trailing_image(),
            default_period: default_period(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            DashboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// The period filter named by `default_period`
    pub fn default_period(&self) -> Result<PeriodFilter, DashboardError> {
        self.default_period.parse().map_err(|e| {
            DashboardError::Config(format!("Invalid default_period: {}", e))
        })
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.default_period()?;
        if !is_date_format(&self.date_format) {
            return Err(DashboardError::Config(format!(
                "Invalid date_format: '{}'",
                self.date_format
            )));
        }
        if self.description_max_len < 4 {
            return Err(DashboardError::Config(
                "description_max_len must be at least 4".into(),
            ));
        }
        Ok(())
    }
}
