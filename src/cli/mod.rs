//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod export;
pub mod report;

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};
use crate::models::PeriodFilter;
use crate::services::{Dashboard, DashboardView};

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_charts, handle_months, handle_summary, handle_table};

/// Arguments shared by every command that looks at one period of a file
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Transaction CSV file (columns: data,descricao,categoria,valor,tipo)
    pub file: PathBuf,

    /// Month to show ("YYYY-MM"), or "all" for every month
    #[arg(short, long)]
    pub month: Option<String>,
}

impl ViewArgs {
    /// The requested period, falling back to the configured default
    pub fn period(&self, settings: &Settings) -> DashboardResult<PeriodFilter> {
        match &self.month {
            Some(month) => month.parse().map_err(|e| {
                DashboardError::Validation(format!(
                    "Invalid month '{}': {}. Use YYYY-MM (e.g., 2024-01) or 'all'",
                    month, e
                ))
            }),
            None => settings.default_period(),
        }
    }

    /// Load the file and compute the requested view
    pub fn load_view(&self, settings: &Settings) -> DashboardResult<DashboardView> {
        let filter = self.period(settings)?;
        let dashboard = Dashboard::load(&self.file)?;
        Ok(dashboard.view(filter))
    }
}
