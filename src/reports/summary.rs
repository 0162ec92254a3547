//! Summary Report
//!
//! Totals for a subset of transactions: money in, money out, the resulting
//! balance and the spending broken down by category.

use std::collections::HashMap;

use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{Money, Transaction};

/// Spending of one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Total spending as an absolute (non-negative) amount
    pub total: Money,
    /// Number of outbound transactions in the category
    pub transaction_count: usize,
    /// Share of the total spending, 0-100
    pub percentage: f64,
}

/// Aggregate totals for a subset of transactions
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Sum of inbound amounts (non-negative)
    pub inbound: Money,
    /// Sum of outbound amounts (signed, never positive)
    pub outbound: Money,
    /// inbound + outbound
    pub balance: Money,
    /// Spending per category, largest first
    pub categories: Vec<CategoryTotal>,
    /// Number of transactions summarized
    pub total_transactions: usize,
}

impl Summary {
    /// Summarize a subset of transactions
    ///
    /// An empty subset yields zero totals and no categories.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut inbound = Money::zero();
        let mut outbound = Money::zero();
        let mut category_spending: HashMap<&str, (Money, usize)> = HashMap::new();

        for txn in transactions {
            if txn.is_inbound() {
                inbound += txn.amount();
            } else {
                outbound += txn.amount();
                let entry = category_spending
                    .entry(txn.category())
                    .or_insert((Money::zero(), 0));
                entry.0 += txn.amount();
                entry.1 += 1;
            }
        }

        let total_abs_spending = outbound.abs();

        let mut categories: Vec<CategoryTotal> = category_spending
            .into_iter()
            .map(|(category, (spending, count))| {
                let total = spending.abs();
                let percentage = if total_abs_spending.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_abs_spending.cents() as f64) * 100.0
                };
                CategoryTotal {
                    category: category.to_string(),
                    total,
                    transaction_count: count,
                    percentage,
                }
            })
            .collect();

        // Most spending first, then by name so the order is stable
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            inbound,
            outbound,
            balance: inbound + outbound,
            categories,
            total_transactions: transactions.len(),
        }
    }

    /// Spending as a non-negative amount
    pub fn outbound_magnitude(&self) -> Money {
        self.outbound.abs()
    }

    pub fn has_spending(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, label: &str, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Resumo Financeiro — {}\n", label));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Entradas: {:>20}\n",
            self.inbound.format_currency(currency)
        ));
        output.push_str(&format!(
            "Saídas:   {:>20}\n",
            self.outbound_magnitude().format_currency(currency)
        ));
        output.push_str(&format!(
            "Saldo:    {:>20}\n",
            self.balance.format_currency(currency)
        ));
        output.push_str(&format!("Lançamentos: {}\n\n", self.total_transactions));

        output.push_str("Gastos por Categoria\n");
        output.push_str(&separator(60));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("Não há gastos por categoria.\n");
            return output;
        }

        let max = self
            .categories
            .first()
            .map(|c| c.total.as_f64())
            .unwrap_or_default();

        for category in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>16} {:>6} {}\n",
                truncate(&category.category, 20),
                category.total.format_currency(currency),
                format_percentage(category.percentage),
                format_bar(category.total.as_f64(), max, 12)
            ));
        }

        output
    }
}
