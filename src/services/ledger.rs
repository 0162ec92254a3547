//! The in-memory transaction table
//!
//! A `Ledger` holds every record of one loaded file, in file order. It is
//! never mutated after loading; views are produced by filtering.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{MonthKey, PeriodFilter, Transaction};

/// All transactions of a loaded file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sorted, de-duplicated months present in the ledger
    pub fn months(&self) -> Vec<MonthKey> {
        self.transactions
            .iter()
            .map(Transaction::month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records matching `filter`, in file order
    ///
    /// `PeriodFilter::All` returns every record unchanged.
    pub fn filter(&self, filter: &PeriodFilter) -> Vec<Transaction> {
        let subset: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|txn| filter.matches(txn.month()))
            .cloned()
            .collect();
        debug!(
            "Filter '{}' kept {} of {} transactions",
            filter,
            subset.len(),
            self.len()
        );
        subset
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}
