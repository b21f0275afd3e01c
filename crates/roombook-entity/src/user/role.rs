//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two roles carried in a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Books facilities for themselves.
    Student,
    /// Manages facilities and reviews booking requests.
    Administrator,
}

impl UserRole {
    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Check if this role is a student.
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student)
    }

    /// Return the role in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = roombook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STUDENT" => Ok(Self::Student),
            "ADMINISTRATOR" => Ok(Self::Administrator),
            _ => Err(roombook_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: STUDENT, ADMINISTRATOR"
            ))),
        }
    }
}
