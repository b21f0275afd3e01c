//! Calendar date CLI commands.

use chrono::{Local, TimeZone, Utc};
use clap::{Args, Subcommand};

use roombook_booking::calendar::{format_api_date, normalize_date, today_in};
use roombook_core::config::AppConfig;
use roombook_core::error::AppError;

/// Arguments for date commands
#[derive(Debug, Args)]
pub struct DateArgs {
    /// Date subcommand
    #[command(subcommand)]
    pub command: DateCommand,
}

/// Date subcommands
#[derive(Debug, Subcommand)]
pub enum DateCommand {
    /// Print a date-like input as `YYYY-MM-DD`
    Normalize {
        /// Date, RFC 3339 timestamp, or local date-time
        input: String,
    },
    /// Print today's date as `YYYY-MM-DD`
    Today,
}

/// Execute date commands
pub fn execute(args: &DateArgs, config: &AppConfig) -> Result<(), AppError> {
    match config.booking.fixed_offset()? {
        Some(offset) => run(args, &offset),
        None => run(args, &Local),
    }
}

fn run<Tz: TimeZone>(args: &DateArgs, tz: &Tz) -> Result<(), AppError> {
    let date = match &args.command {
        DateCommand::Normalize { input } => normalize_date(input, tz)?,
        DateCommand::Today => today_in(tz, &Utc::now()),
    };
    println!("{}", format_api_date(date));
    Ok(())
}
