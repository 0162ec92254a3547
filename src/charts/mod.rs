//! Chart rendering
//!
//! Produces PNG images for the three dashboard charts:
//! - `summary`: inbound vs outbound bars
//! - `categories`: spending per category as a donut
//! - `expenses`: one horizontal bar per outbound transaction
//!
//! Images contain shapes only. Titles and legends travel alongside the PNG
//! in [`ChartImage`] and are typeset by whoever shows the chart: the PDF
//! report draws them under each image and `dashboard charts` prints them
//! next to each file. Rendering never depends on system fonts.

pub mod bar;
mod canvas;
pub mod donut;
pub mod palette;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DashboardError, DashboardResult};
use crate::models::Money;
use crate::reports::{ExpenseList, Summary};

pub use bar::{expense_bars, summary_bar};
pub use donut::category_donut;
pub use palette::Rgb;

/// Which dashboard chart an image holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Summary,
    Categories,
    Expenses,
}

impl ChartKind {
    /// File name stem used when charts are written to disk
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Summary => "resumo",
            Self::Categories => "categorias",
            Self::Expenses => "gastos",
        }
    }
}

/// One legend line: what a colour stands for
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub value: Money,
    /// Share of the chart total, 0-100, where meaningful
    pub share: Option<f64>,
}

/// A rendered chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartImage {
    pub kind: ChartKind,
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// PNG-encoded image
    pub png: Vec<u8>,
    pub legend: Vec<LegendEntry>,
}

impl ChartImage {
    /// Write the PNG into `dir` as `<stem>.png`, returning the file path
    pub fn write_png(&self, dir: &Path) -> DashboardResult<PathBuf> {
        let path = dir.join(format!("{}.png", self.kind.file_stem()));
        std::fs::write(&path, &self.png).map_err(|e| {
            DashboardError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }

    /// Legend as text, one `#RRGGBB label: value (share)` line per entry
    pub fn format_legend(&self, currency: &str) -> String {
        let mut output = String::new();
        for entry in &self.legend {
            output.push_str(&format!(
                "  {} {}: {}",
                entry.color.to_hex(),
                entry.label,
                entry.value.format_currency(currency)
            ));
            if let Some(share) = entry.share {
                output.push_str(&format!(" ({:.1}%)", share));
            }
            output.push('\n');
        }
        output
    }
}

/// Render every chart of a view.
///
/// The result always has three slots, in report order. A chart with nothing
/// to show, or one that fails to render, leaves its slot empty; failures are
/// logged and never abort the caller.
pub fn render_all(
    summary: &Summary,
    expenses: &ExpenseList,
    label: &str,
) -> Vec<Option<ChartImage>> {
    let charts = vec![
        settle(ChartKind::Summary, summary_bar(summary, label).map(Some)),
        settle(ChartKind::Categories, category_donut(summary)),
        settle(ChartKind::Expenses, expense_bars(expenses)),
    ];
    debug!(
        "Rendered {} of {} charts",
        charts.iter().flatten().count(),
        charts.len()
    );
    charts
}

fn settle(kind: ChartKind, result: DashboardResult<Option<ChartImage>>) -> Option<ChartImage> {
    match result {
        Ok(chart) => chart,
        Err(e) => {
            warn!("Skipping {:?} chart: {}", kind, e);
            None
        }
    }
}
