//! The ordered slot validator.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use tracing::debug;

use roombook_core::config::{BookingConfig, DEFAULT_CUTOFF};
use roombook_core::error::AppError;
use roombook_core::traits::Clock;
use roombook_entity::booking::{CalendarEvent, TimeInterval};
use roombook_entity::facility::ResourceRef;

use super::rejection::SlotRejection;
use super::rules::{ends_after_cutoff, first_conflict, is_past};
use crate::maintenance::MaintenanceIndex;

/// Runs the slot rules in order and reports the first violation.
///
/// Order: past, maintenance, daily cutoff, conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotValidator {
    cutoff: NaiveTime,
}

impl Default for SlotValidator {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl SlotValidator {
    /// Creates a validator with an explicit daily cutoff.
    pub fn new(cutoff: NaiveTime) -> Self {
        Self { cutoff }
    }

    /// Creates a validator from the booking configuration.
    pub fn from_config(config: &BookingConfig) -> Result<Self, AppError> {
        Ok(Self::new(config.cutoff()?))
    }

    /// The daily cutoff in local time.
    pub fn cutoff(&self) -> NaiveTime {
        self.cutoff
    }

    /// Validates `interval` on `resource` against `now`.
    ///
    /// The maintenance lookup uses the calendar date of the interval's
    /// start in its own time zone; a date-less flag only blocks today.
    /// On success the interval is handed back for request construction.
    pub fn validate<Tz: TimeZone>(
        &self,
        interval: &TimeInterval<Tz>,
        resource: &ResourceRef,
        now: &DateTime<Utc>,
        events: &[CalendarEvent],
        maintenance: &MaintenanceIndex,
    ) -> Result<TimeInterval<Tz>, SlotRejection> {
        let start = interval.start();
        let date = start.date_naive();
        let today = now.with_timezone(&start.timezone()).date_naive();

        let outcome = if is_past(Some(start), now) {
            Err(SlotRejection::Past)
        } else if maintenance.is_under_maintenance_on(resource, date, today) {
            Err(SlotRejection::Maintenance)
        } else if ends_after_cutoff(start, interval.duration_minutes(), self.cutoff) {
            Err(SlotRejection::Cutoff {
                cutoff: self.cutoff,
            })
        } else if let Some(event) = first_conflict(interval, resource, events) {
            Err(SlotRejection::Conflict {
                event_id: event.id.clone(),
            })
        } else {
            Ok(interval.clone())
        };

        match &outcome {
            Ok(_) => debug!(
                resource = %resource,
                start = %start.naive_local(),
                minutes = interval.duration_minutes(),
                "Slot accepted"
            ),
            Err(rejection) => debug!(
                resource = %resource,
                start = %start.naive_local(),
                reason = rejection.code(),
                "Slot rejected"
            ),
        }
        outcome
    }

    /// Same as [`validate`](Self::validate) with "now" read from `clock`.
    pub fn validate_at<Tz: TimeZone>(
        &self,
        interval: &TimeInterval<Tz>,
        resource: &ResourceRef,
        clock: &dyn Clock,
        events: &[CalendarEvent],
        maintenance: &MaintenanceIndex,
    ) -> Result<TimeInterval<Tz>, SlotRejection> {
        self.validate(interval, resource, &clock.now(), events, maintenance)
    }
}
