//! Booking API request construction from an accepted slot.

use chrono::{SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use roombook_core::error::AppError;
use roombook_entity::booking::{BookingRequest, TimeInterval};
use roombook_entity::facility::ResourceRef;

/// Free-form fields entered with a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// Booking title.
    pub title: String,
    /// Description of the booking's purpose.
    #[serde(default)]
    pub description: String,
    /// Attendees as entered.
    #[serde(default)]
    pub attendees: String,
}

/// Builds the API request body for a validated slot.
///
/// One credit is spent per minute. Fails when `facility` is not numeric,
/// the title is blank, or `available_credits` cannot cover the booking.
pub fn build_request<Tz: TimeZone>(
    interval: &TimeInterval<Tz>,
    facility: &ResourceRef,
    account_email: &str,
    details: BookingDetails,
    available_credits: f64,
) -> Result<BookingRequest, AppError> {
    let facility_id: u64 = facility.as_str().parse().map_err(|_| {
        AppError::validation(format!("Facility id '{facility}' is not numeric"))
    })?;

    if details.title.trim().is_empty() {
        return Err(AppError::validation("Booking title is required"));
    }

    let minutes = interval.duration_minutes();
    let required = minutes as f64;
    if available_credits < required {
        return Err(AppError::validation(format!(
            "Insufficient credits. Required: {required}, Available: {available_credits}"
        )));
    }

    let start = interval.start().naive_local();
    let end = interval.end().naive_local();
    let time_slot = format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"));

    debug!(facility_id, %time_slot, credits = minutes, "Booking request built");

    Ok(BookingRequest {
        facility_id,
        account_email: account_email.to_string(),
        booked_date_time: interval
            .start()
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        time_slot,
        title: details.title,
        description: details.description,
        attendees: details.attendees,
        credits_used: minutes.to_string(),
    })
}
