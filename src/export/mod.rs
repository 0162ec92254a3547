//! Export module for the financial dashboard
//!
//! Writes a view of the ledger out of the program:
//! - CSV: the filtered transactions, in the layout the importer reads
//! - PDF: an A4 report with totals, charts and the transaction table

pub mod csv;
pub mod pdf;

pub use csv::export_transactions_csv;
pub use pdf::{build_report, load_trailing_image, ReportInput, ReportOptions};
