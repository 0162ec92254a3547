//! CLI commands for configuration

use clap::Subcommand;

use crate::config::{DashboardPaths, Settings};
use crate::error::DashboardResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the current settings to the config file
    Init,
}

/// Handle `config`; with no subcommand the paths and settings are shown
pub fn handle_config_command(
    paths: &DashboardPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> DashboardResult<()> {
    match cmd {
        Some(ConfigCommands::Init) => {
            settings.save(paths)?;
            println!("Configuração salva em: {}", paths.settings_file().display());
        }
        None => print!("{}", format_config(paths, settings)),
    }
    Ok(())
}

fn format_config(paths: &DashboardPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Configuração\n");
    output.push_str("============\n");
    output.push_str(&format!(
        "Arquivo:            {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (não criado)"
        }
    ));
    output.push_str(&format!("Moeda:              {}\n", settings.currency_symbol));
    output.push_str(&format!("Formato de data:    {}\n", settings.date_format));
    output.push_str(&format!(
        "Descrição (máx.):   {}\n",
        settings.description_max_len
    ));
    output.push_str(&format!(
        "Imagem final:       {}\n",
        settings.trailing_image.display()
    ));
    output.push_str(&format!("Período padrão:     {}\n", settings.default_period));
    output
}
