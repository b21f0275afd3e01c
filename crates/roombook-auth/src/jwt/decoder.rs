//! Bearer token payload decoding and expiry checks.
//!
//! Signatures are not verified here; the client only reads the payload to
//! decide what to show. The server remains the authority on validity.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use thiserror::Error;
use tracing::warn;

use roombook_core::error::AppError;

use super::claims::{TokenPayload, UserClaims};

/// Why a token could not be decoded.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not `header.payload.signature`.
    #[error("Invalid token format: expected 3 segments, found {0}")]
    SegmentCount(usize),
    /// The payload segment is not valid base64.
    #[error("Invalid token payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    /// The payload is not the expected JSON record.
    #[error("Invalid token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::with_source(
            roombook_core::error::ErrorKind::Authentication,
            err.to_string(),
            err,
        )
    }
}

/// Decodes a token, reporting the reason on failure.
pub fn try_decode(token: &str) -> Result<UserClaims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::SegmentCount(segments.len()));
    };

    let bytes = decode_segment(payload)?;
    let payload: TokenPayload = serde_json::from_slice(&bytes)?;
    Ok(payload.into())
}

/// Decodes a token into user claims.
///
/// Returns `None` (and logs) for any malformed token; never errors.
pub fn decode(token: &str) -> Option<UserClaims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            warn!(error = %e, "Error decoding JWT");
            None
        }
    }
}

/// Whether `token` is expired at `now_seconds`.
///
/// Undecodable tokens count as expired.
pub fn is_expired(token: &str, now_seconds: i64) -> bool {
    match decode(token) {
        Some(claims) => claims.is_expired_at(now_seconds),
        None => true,
    }
}

/// Accepts both the URL-safe alphabet and the standard one, with or
/// without padding.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = segment.trim_end_matches('=');
    if trimmed.contains(['+', '/']) {
        STANDARD_NO_PAD.decode(trimmed)
    } else {
        URL_SAFE_NO_PAD.decode(trimmed)
    }
}
