//! Calendar events as delivered by the booking API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roombook_core::types::id::deserialize_normalized;

use super::interval::TimeInterval;
use super::status::BookingStatus;
use crate::facility::ResourceRef;

/// Extra flags attached to each calendar event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProps {
    /// Booking status.
    #[serde(default)]
    pub status: BookingStatus,
    /// The event ended before the calendar was loaded.
    #[serde(default)]
    pub is_past: bool,
    /// The event is a maintenance block rather than a booking.
    #[serde(default)]
    pub is_maintenance: bool,
}

/// An existing booking or maintenance block on one or more resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Event id, normalised to a string.
    #[serde(deserialize_with = "deserialize_normalized")]
    pub id: String,
    /// Title shown in the calendar.
    #[serde(default)]
    pub title: Option<String>,
    /// Single owning resource, as some feeds send it.
    #[serde(default)]
    pub resource_id: Option<ResourceRef>,
    /// All resources the event occupies.
    #[serde(default)]
    pub resource_ids: Vec<ResourceRef>,
    /// Event start.
    pub start: DateTime<Utc>,
    /// Event end.
    pub end: DateTime<Utc>,
    /// Status and flags.
    #[serde(default)]
    pub extended_props: EventProps,
}

impl CalendarEvent {
    /// Iterates every resource this event occupies.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceRef> {
        self.resource_id.iter().chain(self.resource_ids.iter())
    }

    /// Whether the event occupies `resource`.
    pub fn includes_resource(&self, resource: &ResourceRef) -> bool {
        self.resources().any(|r| r == resource)
    }

    /// The event's span, if it is well formed.
    pub fn interval(&self) -> Option<TimeInterval<Utc>> {
        TimeInterval::new(self.start, self.end).ok()
    }

    /// Event status.
    pub fn status(&self) -> BookingStatus {
        self.extended_props.status
    }
}
