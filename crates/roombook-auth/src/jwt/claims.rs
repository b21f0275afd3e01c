//! Token payload and the user view derived from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roombook_core::types::id::deserialize_normalized_opt;
use roombook_entity::user::UserRole;

/// JSON payload carried in the middle segment of a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    /// Subject: the account email.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: UserRole,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Student number; present for student accounts. Numbers and strings
    /// are both accepted and normalised to a string.
    #[serde(
        default,
        deserialize_with = "deserialize_normalized_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_id: Option<String>,
}

/// The authenticated-user view derived from a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserClaims {
    /// Account email, taken from `sub`.
    pub email: String,
    /// User role.
    pub role: UserRole,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Student number, if any.
    pub student_id: Option<String>,
}

impl From<TokenPayload> for UserClaims {
    fn from(payload: TokenPayload) -> Self {
        Self {
            email: payload.sub,
            role: payload.role,
            exp: payload.exp,
            student_id: payload.student_id,
        }
    }
}

impl UserClaims {
    /// Returns the expiration as a `DateTime<Utc>`, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Expired means strictly before `now_seconds`; a token expiring at
    /// exactly `now_seconds` is still valid.
    pub fn is_expired_at(&self, now_seconds: i64) -> bool {
        self.exp < now_seconds
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self, now_seconds: i64) -> u64 {
        u64::try_from(self.exp - now_seconds).unwrap_or(0)
    }
}
