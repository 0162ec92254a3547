use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use finance_dashboard::cli::{
    handle_charts, handle_config_command, handle_export_command, handle_months, handle_summary,
    handle_table, ConfigCommands, ExportCommands, ViewArgs,
};
use finance_dashboard::config::{DashboardPaths, Settings};

#[derive(Parser)]
#[command(
    name = "dashboard",
    version,
    about = "Personal finance dashboard for transaction CSV files",
    long_about = "Loads a transaction file (data,descricao,categoria,valor,tipo), \
                  summarizes money in and out per month or over the whole file, \
                  renders charts and exports CSV files and PDF reports."
)]
struct Cli {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the months present in a transaction file
    Months {
        /// Transaction CSV file
        file: PathBuf,
    },

    /// Show totals, spending per category and individual expenses
    Summary(ViewArgs),

    /// Show the transactions of a period as a table
    Table(ViewArgs),

    /// Write the period's charts as PNG images
    Charts {
        #[command(flatten)]
        view: ViewArgs,

        /// Directory the images are written to (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a period as CSV or PDF
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show the configuration, or write it with `config init`
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    let paths = DashboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Months { file } => handle_months(&file)?,
        Commands::Summary(view) => handle_summary(&view, &settings)?,
        Commands::Table(view) => handle_table(&view, &settings)?,
        Commands::Charts { view, output } => handle_charts(&view, &settings, output)?,
        Commands::Export(cmd) => handle_export_command(&settings, cmd)?,
        Commands::Config { command } => handle_config_command(&paths, &settings, command)?,
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // Otherwise apply the level to this package's library and binary only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
