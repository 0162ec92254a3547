//! Service layer for the financial dashboard
//!
//! Loading the transaction file, holding it for the session and deriving
//! per-period views from it.

pub mod dashboard;
pub mod import;
pub mod ledger;

pub use dashboard::{Dashboard, DashboardView};
pub use import::{import_csv, import_csv_file, ColumnMapping};
pub use ledger::Ledger;
