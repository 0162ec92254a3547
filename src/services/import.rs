//! CSV Import service
//!
//! Loads a transaction file with the columns `data,descricao,categoria,valor,tipo`
//! into a [`Ledger`]. Any malformed row aborts the import with an error naming
//! the row and the offending value; rows are never silently dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Money, Transaction, TransactionType};
use crate::services::Ledger;

/// Column names of the transaction file, in export order
pub const COLUMNS: [&str; 5] = ["data", "descricao", "categoria", "valor", "tipo"];

/// Date formats accepted in the `data` column, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"];

/// Date-time formats accepted in the `data` column (the time is discarded)
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    pub type_column: usize,
}

impl ColumnMapping {
    /// Resolve the required columns from a header record.
    ///
    /// Header names are matched case-insensitively after trimming; extra
    /// columns are ignored.
    pub fn from_headers(headers: &StringRecord) -> DashboardResult<Self> {
        let find = |name: &str| -> DashboardResult<usize> {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
                .ok_or_else(|| DashboardError::Import(format!("missing column '{}'", name)))
        };

        Ok(Self {
            date_column: find("data")?,
            description_column: find("descricao")?,
            category_column: find("categoria")?,
            amount_column: find("valor")?,
            type_column: find("tipo")?,
        })
    }
}

/// Load a transaction file from disk
pub fn import_csv_file(path: impl AsRef<Path>) -> DashboardResult<Ledger> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        DashboardError::Io(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let ledger = import_csv(file)?;
    debug!(
        "Loaded {} transactions from {}",
        ledger.len(),
        path.display()
    );
    Ok(ledger)
}

/// Load transactions from any CSV reader
pub fn import_csv<R: Read>(reader: R) -> DashboardResult<Ledger> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DashboardError::Import("the file has no header row".into()));
    }
    let mapping = ColumnMapping::from_headers(&headers)?;

    let mut transactions = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // Data rows are numbered from 1, not counting the header
        let row = idx + 1;
        let record = result
            .map_err(|e| DashboardError::Import(format!("Error reading row {}: {}", row, e)))?;
        transactions.push(parse_record(&record, row, &mapping)?);
    }

    Ok(Ledger::new(transactions))
}

/// Parse a single CSV record
fn parse_record(
    record: &StringRecord,
    row: usize,
    mapping: &ColumnMapping,
) -> DashboardResult<Transaction> {
    let field = |col: usize, name: &'static str| -> DashboardResult<&str> {
        record
            .get(col)
            .ok_or_else(|| DashboardError::Import(format!("row {} has no '{}' field", row, name)))
    };

    let date_str = field(mapping.date_column, "data")?;
    let date = parse_date(date_str)
        .ok_or_else(|| DashboardError::invalid_field(row, "date", date_str))?;

    let amount_str = field(mapping.amount_column, "valor")?;
    let amount =
        Money::parse(amount_str).map_err(|_| DashboardError::invalid_field(row, "amount", amount_str))?;

    let type_str = field(mapping.type_column, "tipo")?;
    let kind: TransactionType = type_str
        .parse()
        .map_err(|_| DashboardError::invalid_field(row, "type", type_str))?;

    let transaction = Transaction::new(
        date,
        field(mapping.description_column, "descricao")?,
        field(mapping.category_column, "categoria")?,
        amount,
        kind,
    );

    transaction
        .validate()
        .map_err(|e| DashboardError::Validation(format!("row {}: {}", row, e)))?;

    Ok(transaction)
}

/// Parse a date string using multiple format attempts
fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.date())
        })
}
