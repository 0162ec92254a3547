//! Core data models for the financial dashboard
//!
//! This module contains the data structures that represent a loaded
//! transaction file: money amounts, month keys, period filters and the
//! transaction records themselves.

pub mod money;
pub mod period;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, PeriodFilter, PeriodParseError, ALL_MONTHS_LABEL};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
