//! Booking slot CLI commands.

use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use roombook_booking::calendar::parse_local_datetime;
use roombook_booking::{
    BookingDetails, MaintenanceIndex, MaintenanceSnapshot, SlotRejection, SlotValidator,
    build_request,
};
use roombook_core::config::AppConfig;
use roombook_core::error::AppError;
use roombook_entity::booking::{CalendarEvent, TimeInterval};
use roombook_entity::facility::ResourceRef;

/// Arguments for slot commands
#[derive(Debug, Args)]
pub struct SlotArgs {
    /// Slot subcommand
    #[command(subcommand)]
    pub command: SlotCommand,
}

/// Slot subcommands
#[derive(Debug, Subcommand)]
pub enum SlotCommand {
    /// Check whether a slot can be booked
    Check(SlotInput),
    /// Check a slot and print the booking request body for it
    Request {
        /// The slot to book
        #[command(flatten)]
        slot: SlotInput,
        /// Booking account email
        #[arg(long)]
        email: String,
        /// Booking title
        #[arg(long)]
        title: String,
        /// Booking description
        #[arg(long, default_value = "")]
        description: String,
        /// Attendees
        #[arg(long, default_value = "")]
        attendees: String,
        /// Available credit balance
        #[arg(long)]
        credits: f64,
    },
}

/// A candidate slot and the data it is checked against
#[derive(Debug, Args)]
pub struct SlotInput {
    /// Facility id
    #[arg(short, long)]
    pub resource: String,
    /// Start: RFC 3339, or local `YYYY-MM-DDTHH:MM`
    #[arg(short, long)]
    pub start: String,
    /// Duration in minutes
    #[arg(short, long, default_value_t = 60)]
    pub minutes: i64,
    /// JSON file with the calendar's existing events
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// JSON file with a maintenance snapshot
    #[arg(long)]
    pub maintenance: Option<PathBuf>,
    /// Evaluate as of this instant (RFC 3339) instead of now
    #[arg(long)]
    pub now: Option<String>,
}

/// Slot verdict row
#[derive(Debug, Serialize, Tabled)]
pub struct SlotRow {
    /// Resource
    pub resource: String,
    /// Start
    pub start: String,
    /// End
    pub end: String,
    /// Verdict
    pub verdict: String,
    /// Reason
    pub reason: String,
}

/// Execute slot commands
pub fn execute(args: &SlotArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let validator = SlotValidator::from_config(&config.booking)?;
    match config.booking.fixed_offset()? {
        Some(offset) => run(args, &validator, &offset, format),
        None => run(args, &validator, &Local, format),
    }
}

fn run<Tz: TimeZone>(
    args: &SlotArgs,
    validator: &SlotValidator,
    tz: &Tz,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        SlotCommand::Check(input) => {
            check(input, validator, tz, Some(format))?;
        }
        SlotCommand::Request {
            slot,
            email,
            title,
            description,
            attendees,
            credits,
        } => {
            let interval = check(slot, validator, tz, request_verdict_format(format))?;
            let details = BookingDetails {
                title: title.clone(),
                description: description.clone(),
                attendees: attendees.clone(),
            };
            let request = build_request(
                &interval,
                &ResourceRef::new(&slot.resource),
                email,
                details,
                *credits,
            )?;
            output::print_item(&request, format);
        }
    }
    Ok(())
}

/// JSON output of `slot request` is the request body alone.
fn request_verdict_format(format: OutputFormat) -> Option<OutputFormat> {
    match format {
        OutputFormat::Table => Some(OutputFormat::Table),
        OutputFormat::Json => None,
    }
}

/// Validates the slot, prints the verdict when `verdict` is set, and
/// returns the accepted interval.
fn check<Tz: TimeZone>(
    input: &SlotInput,
    validator: &SlotValidator,
    tz: &Tz,
    verdict: Option<OutputFormat>,
) -> Result<TimeInterval<Tz>, AppError> {
    let resource = ResourceRef::new(&input.resource);
    let start = parse_local_datetime(&input.start, tz)?;
    let interval = TimeInterval::with_duration(start, input.minutes)?;

    let now = match &input.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| AppError::validation(format!("Invalid --now '{}': {}", raw, e)))?,
        None => Utc::now(),
    };

    let events: Vec<CalendarEvent> = match &input.events {
        Some(path) => super::read_json(path)?,
        None => Vec::new(),
    };

    let mut maintenance = MaintenanceIndex::new();
    if let Some(path) = &input.maintenance {
        let snapshot: MaintenanceSnapshot = super::read_json(path)?;
        maintenance.apply_snapshot(snapshot);
    }

    let outcome = validator.validate(&interval, &resource, &now, &events, &maintenance);
    if let Some(format) = verdict {
        output::print_row(&verdict_row(&resource, &interval, &outcome), format);
    }

    outcome.map_err(AppError::from)
}

fn verdict_row<Tz: TimeZone>(
    resource: &ResourceRef,
    interval: &TimeInterval<Tz>,
    outcome: &Result<TimeInterval<Tz>, SlotRejection>,
) -> SlotRow {
    SlotRow {
        resource: resource.to_string(),
        start: interval.start().naive_local().format("%Y-%m-%d %H:%M").to_string(),
        end: interval.end().naive_local().format("%Y-%m-%d %H:%M").to_string(),
        verdict: if outcome.is_ok() { "accepted" } else { "rejected" }.to_string(),
        reason: match outcome {
            Ok(_) => "-".to_string(),
            Err(rejection) => rejection.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_prints_only_the_body() {
        assert_eq!(request_verdict_format(OutputFormat::Json), None);
        assert_eq!(
            request_verdict_format(OutputFormat::Table),
            Some(OutputFormat::Table)
        );
    }

    #[test]
    fn test_verdict_row_reports_reason() {
        let start = Utc.with_ymd_and_hms(2025, 5, 18, 18, 30, 0).unwrap();
        let interval = TimeInterval::with_duration(start, 60).unwrap();
        let resource = ResourceRef::from("3");

        let rejected = verdict_row(&resource, &interval, &Err(SlotRejection::Maintenance));
        assert_eq!(rejected.verdict, "rejected");
        assert_eq!(rejected.start, "2025-05-18 18:30");
        assert_eq!(rejected.end, "2025-05-18 19:30");
        assert_eq!(rejected.reason, SlotRejection::Maintenance.to_string());

        let accepted = verdict_row(&resource, &interval, &Ok(interval.clone()));
        assert_eq!(accepted.verdict, "accepted");
        assert_eq!(accepted.reason, "-");
    }
}
