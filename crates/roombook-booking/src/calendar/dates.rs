//! Canonical `YYYY-MM-DD` dates for the booking API.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::error;

use roombook_core::error::AppError;

use super::navigation::CalendarView;

const API_DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Formats a date the way the booking API expects it.
pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Parses a date-like string into a calendar date in `tz`.
///
/// Accepts a plain date, an RFC 3339 timestamp (converted to `tz` before
/// taking the date), or a date-time without offset (taken as already
/// local).
pub fn normalize_date<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<NaiveDate, AppError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, API_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(tz).date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| AppError::validation(format!("Unrecognised date: '{input}'")))
}

/// Parses a slot start into `tz`.
///
/// RFC 3339 input is converted; input without an offset is read as wall
/// time in `tz` and must name exactly one instant there.
pub fn parse_local_datetime<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, AppError> {
    let input = input.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(tz));
    }
    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| AppError::validation(format!("Unrecognised date-time: '{input}'")))?;
    tz.from_local_datetime(&naive).single().ok_or_else(|| {
        AppError::validation(format!("Local time '{input}' is ambiguous or does not exist"))
    })
}

/// Today's calendar date in `tz` at the instant `now`.
pub fn today_in<Tz: TimeZone>(tz: &Tz, now: &DateTime<Utc>) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

/// The date the calendar is showing, falling back to `today`.
///
/// A view that has no date yet, or no view at all, yields `today`. A view
/// that fails is logged and also yields `today`.
pub fn current_calendar_date(view: Option<&dyn CalendarView>, today: NaiveDate) -> NaiveDate {
    let Some(view) = view else {
        return today;
    };
    match view.current_date() {
        Ok(Some(date)) => date,
        Ok(None) => today,
        Err(e) => {
            error!(error = %e, "Error getting current calendar date");
            today
        }
    }
}
