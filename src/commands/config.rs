//! Configuration CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use roombook_core::config::AppConfig;
use roombook_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Check that the configuration is usable
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            let cutoff = config.booking.cutoff()?;
            let offset = config.booking.fixed_offset()?;
            if !matches!(config.store.provider.as_str(), "memory" | "file") {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{}'",
                    config.store.provider
                )));
            }

            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Store", &config.store.provider);
            output::print_kv("Store path", &config.store.path);
            output::print_kv("Token key", &config.auth.token_key);
            output::print_kv("Cutoff", &cutoff.format("%H:%M").to_string());
            let zone = offset.map_or_else(|| "host local".to_string(), |o| o.to_string());
            output::print_kv("Time zone", &zone);
        }
    }

    Ok(())
}
