//! Individual expenses
//!
//! The outbound transactions of a view, largest first.

use crate::display::report::truncate;
use crate::models::{Money, Transaction};

/// Outbound transactions ordered by amount ascending (largest expense first)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseList {
    pub items: Vec<Transaction>,
}

impl ExpenseList {
    pub fn from_records(records: &[Transaction]) -> Self {
        let mut items: Vec<Transaction> = records
            .iter()
            .filter(|txn| txn.is_outbound())
            .cloned()
            .collect();
        // Stable sort keeps file order between equal amounts
        items.sort_by_key(|txn| txn.amount());
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Largest single expense as a non-negative amount
    pub fn largest(&self) -> Money {
        self.items
            .first()
            .map(|txn| txn.amount().abs())
            .unwrap_or_default()
    }

    /// Format the list for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.items.is_empty() {
            return "Não há gastos registrados.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Gastos Individuais\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for txn in &self.items {
            output.push_str(&format!(
                "{} {:<28} {:>18}\n",
                txn.date().format("%Y-%m-%d"),
                truncate(txn.description(), 28),
                txn.amount().abs().format_currency(currency)
            ));
        }
        output
    }
}
