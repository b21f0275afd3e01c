//! CLI command definitions and dispatch.

pub mod config;
pub mod date;
pub mod session;
pub mod slot;
pub mod token;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::output::OutputFormat;
use roombook_auth::SessionManager;
use roombook_core::config::AppConfig;
use roombook_core::error::{AppError, ErrorKind};
use roombook_core::traits::SystemClock;
use roombook_store::StoreManager;

/// RoomBook: booking slot checks and auth session tooling
#[derive(Debug, Parser)]
#[command(name = "roombook", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional; missing files are skipped)
    #[arg(short, long, default_value = "roombook.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode or mint bearer tokens
    Token(token::TokenArgs),
    /// Manage the persisted auth session
    Session(session::SessionArgs),
    /// Validate booking slots
    Slot(slot::SlotArgs),
    /// Calendar date helpers
    Date(date::DateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Token(args) => token::execute(args, self.format),
            Commands::Session(args) => session::execute(args, config, self.format),
            Commands::Slot(args) => slot::execute(args, config, self.format),
            Commands::Date(args) => date::execute(args, config),
            Commands::Config(args) => config::execute(args, config, &self.config, self.format),
        }
    }
}

/// Helper: open the auth session backed by the configured store
pub fn open_session(config: &AppConfig) -> Result<SessionManager, AppError> {
    let store = StoreManager::new(&config.store)?;
    SessionManager::new(store.store(), Arc::new(SystemClock), &config.auth)
}

/// Helper: read a JSON document from disk
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::NotFound,
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid JSON in '{}': {}", path.display(), e),
            e,
        )
    })
}
