//! Reasons a slot is refused.

use chrono::NaiveTime;
use thiserror::Error;

use roombook_core::error::{AppError, ErrorKind};

/// The first rule a candidate slot violated.
///
/// `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotRejection {
    /// The slot starts before now.
    #[error("Cannot create bookings in the past")]
    Past,

    /// The facility is flagged under maintenance for the slot's date.
    #[error("This facility is currently under maintenance and cannot be booked.")]
    Maintenance,

    /// The slot ends after the daily cutoff.
    #[error("Bookings cannot extend beyond {}", .cutoff.format("%-I:%M %p"))]
    Cutoff {
        /// The configured cutoff.
        cutoff: NaiveTime,
    },

    /// The slot overlaps an existing event on the same resource.
    #[error("This time slot is already booked")]
    Conflict {
        /// Id of the first overlapping event.
        event_id: String,
    },
}

impl SlotRejection {
    /// Stable short code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Maintenance => "maintenance",
            Self::Cutoff { .. } => "cutoff",
            Self::Conflict { .. } => "conflict",
        }
    }
}

impl From<SlotRejection> for AppError {
    fn from(rejection: SlotRejection) -> Self {
        let kind = match rejection {
            SlotRejection::Past | SlotRejection::Cutoff { .. } => ErrorKind::Validation,
            SlotRejection::Maintenance | SlotRejection::Conflict { .. } => ErrorKind::Conflict,
        };
        AppError::with_source(kind, rejection.to_string(), rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            SlotRejection::Past.to_string(),
            "Cannot create bookings in the past"
        );
        assert_eq!(
            SlotRejection::Maintenance.to_string(),
            "This facility is currently under maintenance and cannot be booked."
        );
        let cutoff = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        assert_eq!(
            SlotRejection::Cutoff { cutoff }.to_string(),
            "Bookings cannot extend beyond 7:00 PM"
        );
        assert_eq!(
            SlotRejection::Conflict {
                event_id: "7".into()
            }
            .to_string(),
            "This time slot is already booked"
        );
    }

    #[test]
    fn test_cutoff_message_follows_configuration() {
        let cutoff = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
        assert_eq!(
            SlotRejection::Cutoff { cutoff }.to_string(),
            "Bookings cannot extend beyond 5:30 PM"
        );
    }

    #[test]
    fn test_into_app_error() {
        let err = AppError::from(SlotRejection::Maintenance);
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(
            err.message,
            "This facility is currently under maintenance and cannot be booked."
        );
        assert_eq!(AppError::from(SlotRejection::Past).kind, ErrorKind::Validation);
    }
}
