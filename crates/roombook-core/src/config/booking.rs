//! Slot validation configuration.

use chrono::{FixedOffset, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Daily cutoff used when nothing is configured.
pub const DEFAULT_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(19, 0, 0) {
    Some(time) => time,
    None => panic!("default cutoff must be a valid time"),
};

/// Booking rules applied by the slot validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Hour of the daily cutoff (local time, 0-23).
    #[serde(default = "default_cutoff_hour")]
    pub cutoff_hour: u32,
    /// Minute of the daily cutoff (0-59).
    #[serde(default)]
    pub cutoff_minute: u32,
    /// Fixed UTC offset in minutes used as "local" time.
    /// When absent the host time zone is used.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            cutoff_hour: default_cutoff_hour(),
            cutoff_minute: 0,
            utc_offset_minutes: None,
        }
    }
}

impl BookingConfig {
    /// Returns the cutoff as a time of day.
    pub fn cutoff(&self) -> Result<NaiveTime, AppError> {
        NaiveTime::from_hms_opt(self.cutoff_hour, self.cutoff_minute, 0).ok_or_else(|| {
            AppError::configuration(format!(
                "Invalid booking cutoff {:02}:{:02}",
                self.cutoff_hour, self.cutoff_minute
            ))
        })
    }

    /// Returns the configured fixed offset, if any.
    pub fn fixed_offset(&self) -> Result<Option<FixedOffset>, AppError> {
        match self.utc_offset_minutes {
            None => Ok(None),
            Some(minutes) => FixedOffset::east_opt(minutes * 60)
                .map(Some)
                .ok_or_else(|| {
                    AppError::configuration(format!("Invalid UTC offset: {minutes} minutes"))
                }),
        }
    }
}

fn default_cutoff_hour() -> u32 {
    DEFAULT_CUTOFF.hour()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff_is_seven_pm() {
        let cutoff = BookingConfig::default().cutoff().unwrap();
        assert_eq!(cutoff, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(cutoff, DEFAULT_CUTOFF);
    }

    #[test]
    fn test_invalid_cutoff_rejected() {
        let config = BookingConfig {
            cutoff_hour: 25,
            ..BookingConfig::default()
        };
        assert!(config.cutoff().is_err());
    }

    #[test]
    fn test_fixed_offset() {
        let config = BookingConfig {
            utc_offset_minutes: Some(480),
            ..BookingConfig::default()
        };
        let offset = config.fixed_offset().unwrap().unwrap();
        assert_eq!(offset.local_minus_utc(), 8 * 3600);
        assert!(BookingConfig::default().fixed_offset().unwrap().is_none());
    }
}
