//! Request body for creating a booking through the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/bookings`.
///
/// Credits are spent one per booked minute, so `credits_used` doubles as
/// the booking duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Numeric facility id.
    pub facility_id: u64,
    /// Email of the booking account.
    pub account_email: String,
    /// Start instant, RFC 3339 in UTC.
    pub booked_date_time: String,
    /// Local wall-clock slot, `"HH:MM - HH:MM"`.
    pub time_slot: String,
    /// Booking title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Attendee list as entered.
    pub attendees: String,
    /// Credits (minutes) consumed by the booking.
    pub credits_used: String,
}
