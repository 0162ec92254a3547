//! Path management for the financial dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `DASHBOARD_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory for `finance-dashboard`
//!    (e.g. `~/.config/finance-dashboard` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashboardError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "DASHBOARD_CONFIG_DIR";

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    /// Base directory for configuration
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Create a new DashboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform configuration
    /// directory cannot be determined.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DashboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            DashboardError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default configuration directory for this platform
fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    ProjectDirs::from("", "", "finance-dashboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            DashboardError::Config(format!(
                "Could not determine a configuration directory; set {}",
                CONFIG_DIR_ENV
            ))
        })
}
