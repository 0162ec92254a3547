//! Reports module for the financial dashboard
//!
//! Aggregations computed over a filtered subset of transactions: the
//! inbound/outbound/balance summary with its category breakdown, and the
//! list of individual expenses.

pub mod expenses;
pub mod summary;

pub use expenses::ExpenseList;
pub use summary::{CategoryTotal, Summary};
