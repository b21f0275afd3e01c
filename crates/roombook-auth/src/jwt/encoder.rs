//! Unsigned token creation for tooling and tests.
//!
//! Real tokens are minted by the booking API. These helpers only produce
//! the same three-segment shape so that decoding paths can be exercised
//! without a server.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};

use roombook_core::error::AppError;
use roombook_entity::user::UserRole;

use super::claims::TokenPayload;

const UNSIGNED_HEADER: &str = r#"{"alg":"none","typ":"JWT"}"#;

/// Encodes `payload` as `header.payload.signature` with a placeholder signature.
pub fn encode_unsigned(payload: &TokenPayload) -> Result<String, AppError> {
    let header = URL_SAFE_NO_PAD.encode(UNSIGNED_HEADER);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload)?);
    let signature = URL_SAFE_NO_PAD.encode("unsigned");
    Ok(format!("{header}.{body}.{signature}"))
}

/// Issues unsigned tokens with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct TokenEncoder {
    /// Token lifetime.
    ttl: Duration,
}

impl TokenEncoder {
    /// Creates an encoder whose tokens live for `ttl_seconds`.
    ///
    /// The lifetime must be positive and representable as a duration.
    pub fn new(ttl_seconds: i64) -> Result<Self, AppError> {
        if ttl_seconds <= 0 {
            return Err(AppError::validation(format!(
                "Token lifetime must be positive, got {ttl_seconds} seconds"
            )));
        }
        let ttl = Duration::try_seconds(ttl_seconds).ok_or_else(|| {
            AppError::validation(format!("Token lifetime of {ttl_seconds} seconds is out of range"))
        })?;
        Ok(Self { ttl })
    }

    /// Issues a token for the given identity, valid from `now`.
    pub fn issue(
        &self,
        email: &str,
        role: UserRole,
        student_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let payload = TokenPayload {
            sub: email.to_string(),
            role,
            exp: now
                .checked_add_signed(self.ttl)
                .ok_or_else(|| AppError::validation("Token expiry is out of range"))?
                .timestamp(),
            iat: Some(now.timestamp()),
            student_id,
        };
        encode_unsigned(&payload)
    }
}
