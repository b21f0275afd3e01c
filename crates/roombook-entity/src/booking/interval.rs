//! Time interval value object.

use chrono::{DateTime, Duration, TimeZone, Utc};

use roombook_core::error::AppError;

/// A `[start, end)` interval in the time zone `Tz`.
///
/// The constructor guarantees `start < end`.
#[derive(Debug, Clone)]
pub struct TimeInterval<Tz: TimeZone = Utc> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeInterval<Tz> {
    /// Creates an interval, rejecting empty or inverted ranges.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::validation(format!(
                "Interval start {} must be before end {}",
                start.naive_local(),
                end.naive_local()
            )));
        }
        Ok(Self { start, end })
    }

    /// Creates an interval of `minutes` starting at `start`.
    pub fn with_duration(start: DateTime<Tz>, minutes: i64) -> Result<Self, AppError> {
        if minutes <= 0 {
            return Err(AppError::validation(format!(
                "Booking duration must be positive, got {minutes} minutes"
            )));
        }
        let end = Duration::try_minutes(minutes)
            .and_then(|delta| start.clone().checked_add_signed(delta))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Booking duration of {minutes} minutes is out of range"
                ))
            })?;
        Self::new(start, end)
    }

    /// Interval start.
    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Interval end.
    pub fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Whole minutes between start and end.
    pub fn duration_minutes(&self) -> i64 {
        (self.end.clone() - self.start.clone()).num_minutes()
    }

    /// Strict overlap: touching endpoints do not overlap.
    pub fn overlaps<Tz2: TimeZone>(&self, other: &TimeInterval<Tz2>) -> bool {
        self.start.timestamp_millis() < other.end.timestamp_millis()
            && self.end.timestamp_millis() > other.start.timestamp_millis()
    }

    /// Converts both endpoints to another time zone.
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> TimeInterval<Tz2> {
        TimeInterval {
            start: self.start.with_timezone(tz),
            end: self.end.with_timezone(tz),
        }
    }
}

impl<Tz: TimeZone, Tz2: TimeZone> PartialEq<TimeInterval<Tz2>> for TimeInterval<Tz> {
    fn eq(&self, other: &TimeInterval<Tz2>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
