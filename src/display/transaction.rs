//! Transaction display formatting
//!
//! Renders the detail table of a view for the terminal.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{format_date, truncate};
use crate::models::Transaction;

/// One row of the detail table
#[derive(Debug, Clone, Tabled)]
pub struct TransactionRow {
    #[tabled(rename = "Data")]
    pub date: String,
    #[tabled(rename = "Descrição")]
    pub description: String,
    #[tabled(rename = "Categoria")]
    pub category: String,
    #[tabled(rename = "Tipo")]
    pub kind: String,
    #[tabled(rename = "Valor")]
    pub amount: String,
}

impl TransactionRow {
    pub fn new(
        txn: &Transaction,
        date_format: &str,
        currency: &str,
        description_max_len: usize,
    ) -> Self {
        Self {
            date: format_date(txn.date(), date_format),
            description: truncate(txn.description(), description_max_len),
            category: txn.category().to_string(),
            kind: txn.kind().to_string(),
            amount: txn.amount().format_currency(currency),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    date_format: &str,
    currency: &str,
    description_max_len: usize,
) -> String {
    if transactions.is_empty() {
        return "Nenhuma transação encontrada.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, date_format, currency, description_max_len));

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n", table)
}
