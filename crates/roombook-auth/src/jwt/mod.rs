//! Bearer token decoding, expiry, and unsigned encoding.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{TokenPayload, UserClaims};
pub use decoder::{TokenError, decode, is_expired, try_decode};
pub use encoder::{TokenEncoder, encode_unsigned};
