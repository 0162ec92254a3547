//! CLI commands for data export
//!
//! Writes the selected period as CSV or as a PDF report.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use super::ViewArgs;
use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};
use crate::export::load_trailing_image;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the period's transactions to CSV
    Csv {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file path (default: financeiro_<period>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the period as a PDF report
    Pdf {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file path (default: relatorio_financeiro_<period>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Image placed at the end of the report (default: from settings)
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(settings: &Settings, cmd: ExportCommands) -> DashboardResult<()> {
    match cmd {
        ExportCommands::Csv { view, output } => handle_export_csv(settings, &view, output),
        ExportCommands::Pdf {
            view,
            output,
            image,
        } => handle_export_pdf(settings, &view, output, image),
    }
}

fn handle_export_csv(
    settings: &Settings,
    args: &ViewArgs,
    output: Option<PathBuf>,
) -> DashboardResult<()> {
    let view = args.load_view(settings)?;
    let path = output.unwrap_or_else(|| PathBuf::from(view.csv_file_name()));

    let file = File::create(&path).map_err(|e| {
        DashboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    view.write_csv(BufWriter::new(file))?;

    info!(
        "Exported {} transactions to {}",
        view.records().len(),
        path.display()
    );
    println!("CSV exportado para: {}", path.display());
    Ok(())
}

fn handle_export_pdf(
    settings: &Settings,
    args: &ViewArgs,
    output: Option<PathBuf>,
    image: Option<PathBuf>,
) -> DashboardResult<()> {
    let view = args.load_view(settings)?;
    let path = output.unwrap_or_else(|| PathBuf::from(view.pdf_file_name()));
    let image_path = image.unwrap_or_else(|| settings.trailing_image.clone());
    let trailing_image = load_trailing_image(&image_path);

    let pdf = view.build_pdf(settings, trailing_image.as_deref())?;
    std::fs::write(&path, &pdf).map_err(|e| {
        DashboardError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!("Wrote {} byte report to {}", pdf.len(), path.display());
    println!("Relatório exportado para: {}", path.display());
    Ok(())
}
