//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports and the transaction table for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    format_bar, format_date, format_percentage, is_date_format, separator, truncate,
};
pub use transaction::{format_transaction_table, TransactionRow};
