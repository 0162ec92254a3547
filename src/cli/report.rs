//! CLI commands for viewing a transaction file
//!
//! `months`, `summary`, `table` and `charts` all print to stdout; the
//! `charts` command writes PNG files and prints their paths.

use std::path::{Path, PathBuf};

use tracing::info;

use super::ViewArgs;
use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::{DashboardError, DashboardResult};
use crate::services::Dashboard;

/// List the months present in a file
pub fn handle_months(file: &Path) -> DashboardResult<()> {
    let dashboard = Dashboard::load(file)?;
    let months = dashboard.months();

    if months.is_empty() {
        println!("Nenhum mês encontrado.");
        return Ok(());
    }
    for month in months {
        println!("{}", month);
    }
    Ok(())
}

/// Print totals, the category breakdown and the individual expenses
pub fn handle_summary(args: &ViewArgs, settings: &Settings) -> DashboardResult<()> {
    let view = args.load_view(settings)?;
    let currency = &settings.currency_symbol;

    println!("{}", view.summary().format_terminal(&view.label(), currency));
    print!("{}", view.expenses().format_terminal(currency));
    Ok(())
}

/// Print the transaction table of a period
pub fn handle_table(args: &ViewArgs, settings: &Settings) -> DashboardResult<()> {
    let view = args.load_view(settings)?;

    println!("{}", view.label());
    print!(
        "{}",
        format_transaction_table(
            view.records(),
            &settings.date_format,
            &settings.currency_symbol,
            settings.description_max_len,
        )
    );
    Ok(())
}

/// Write the period's charts as PNG files into `output`
pub fn handle_charts(
    args: &ViewArgs,
    settings: &Settings,
    output: Option<PathBuf>,
) -> DashboardResult<()> {
    let view = args.load_view(settings)?;
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir).map_err(|e| {
        DashboardError::Io(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let charts = view.render_charts();
    let mut written = 0;
    for chart in charts.iter().flatten() {
        let path = chart.write_png(&dir)?;
        info!("Wrote {} chart to {}", chart.kind.file_stem(), path.display());
        println!("{}: {}", chart.title, path.display());
        print!("{}", chart.format_legend(&settings.currency_symbol));
        written += 1;
    }

    if written < charts.len() {
        println!(
            "{} gráfico(s) sem dados para {}.",
            charts.len() - written,
            view.label()
        );
    }
    Ok(())
}
