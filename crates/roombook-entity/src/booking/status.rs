//! Booking status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a booking as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Awaiting administrator review.
    #[default]
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Confirmed by the system.
    Confirmed,
    /// Rejected by an administrator.
    Rejected,
    /// Cancelled by the student or an administrator.
    Cancelled,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Return the status in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Confirmed => "CONFIRMED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
