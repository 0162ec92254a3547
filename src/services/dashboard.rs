//! Dashboard session
//!
//! A `Dashboard` owns the ledger loaded at startup. Each period selection
//! produces a [`DashboardView`]: the filtered records plus everything
//! derived from them. Views are recomputed from scratch on every selection
//! and never share state.

use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::charts::{self, ChartImage};
use crate::config::Settings;
use crate::error::DashboardResult;
use crate::export::{build_report, export_transactions_csv, ReportInput, ReportOptions};
use crate::models::{MonthKey, PeriodFilter, Transaction};
use crate::reports::{ExpenseList, Summary};
use crate::services::import::{import_csv, import_csv_file};
use crate::services::Ledger;

/// A loaded transaction file
#[derive(Debug, Clone)]
pub struct Dashboard {
    ledger: Ledger,
}

impl Dashboard {
    /// Load the transaction file at `path`
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        let ledger = import_csv_file(path)?;
        info!(
            "Loaded {} transactions over {} months from {}",
            ledger.len(),
            ledger.months().len(),
            path.display()
        );
        Ok(Self { ledger })
    }

    /// Load transactions from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> DashboardResult<Self> {
        Ok(Self {
            ledger: import_csv(reader)?,
        })
    }

    /// Months available for selection, oldest first
    pub fn months(&self) -> Vec<MonthKey> {
        self.ledger.months()
    }

    /// Compute the view for one period
    ///
    /// A month without records yields an empty view with zero totals.
    pub fn view(&self, filter: PeriodFilter) -> DashboardView {
        let records = self.ledger.filter(&filter);
        DashboardView::new(filter, records)
    }
}

/// One period's records and the figures derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    filter: PeriodFilter,
    records: Vec<Transaction>,
    summary: Summary,
    expenses: ExpenseList,
}

impl DashboardView {
    pub fn new(filter: PeriodFilter, records: Vec<Transaction>) -> Self {
        let summary = Summary::generate(&records);
        let expenses = ExpenseList::from_records(&records);
        Self {
            filter,
            records,
            summary,
            expenses,
        }
    }

    pub fn filter(&self) -> PeriodFilter {
        self.filter
    }

    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    /// Human-readable period name
    pub fn label(&self) -> String {
        self.filter.label()
    }

    /// Render the summary, category and expense charts, in that order
    pub fn render_charts(&self) -> Vec<Option<ChartImage>> {
        charts::render_all(&self.summary, &self.expenses, &self.label())
    }

    /// Write the view's records as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> DashboardResult<()> {
        export_transactions_csv(&self.records, writer)
    }

    /// Build the PDF report for this view
    pub fn build_pdf(
        &self,
        settings: &Settings,
        trailing_image: Option<&[u8]>,
    ) -> DashboardResult<Vec<u8>> {
        let charts = self.render_charts();
        let label = self.label();
        build_report(&ReportInput {
            label: &label,
            records: &self.records,
            summary: &self.summary,
            charts: &charts,
            trailing_image,
            options: ReportOptions {
                currency: &settings.currency_symbol,
                date_format: &settings.date_format,
                description_max_len: settings.description_max_len,
            },
        })
    }

    /// Default file name of the CSV export
    pub fn csv_file_name(&self) -> String {
        format!("financeiro_{}.csv", self.filter.slug())
    }

    /// Default file name of the PDF report
    pub fn pdf_file_name(&self) -> String {
        format!("relatorio_financeiro_{}.pdf", self.filter.slug())
    }
}
