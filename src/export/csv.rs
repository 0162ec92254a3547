//! CSV Export functionality
//!
//! Writes a view's transactions back out in the same five-column layout the
//! importer reads, so an exported file can be loaded again unchanged.

use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::models::Transaction;
use crate::services::import::COLUMNS;

/// Export transactions to CSV, one row per transaction in the given order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> DashboardResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(COLUMNS).map_err(export_error)?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.date().format("%Y-%m-%d").to_string(),
                txn.description().to_string(),
                txn.category().to_string(),
                txn.amount().to_string(),
                txn.kind().as_str().to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;

    Ok(())
}

fn export_error<E: std::fmt::Display>(err: E) -> DashboardError {
    DashboardError::Export(err.to_string())
}
