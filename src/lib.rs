//! Financial dashboard for personal transaction files
//!
//! This library loads a CSV of transactions, computes totals for a single
//! month or for the whole file and presents them as terminal reports,
//! charts, CSV exports and an A4 PDF report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, transactions)
//! - `services`: Loading, filtering and the per-period dashboard view
//! - `reports`: Totals and the individual expense list
//! - `display`: Terminal formatting
//! - `charts`: PNG chart rendering
//! - `export`: CSV and PDF output
//! - `cli`: Command handlers for the `dashboard` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_dashboard::models::PeriodFilter;
//! use finance_dashboard::services::Dashboard;
//!
//! let dashboard = Dashboard::load("transacoes.csv")?;
//! let view = dashboard.view(PeriodFilter::All);
//! println!("{}", view.summary().balance);
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{DashboardError, DashboardResult};
