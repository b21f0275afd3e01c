//! # roombook-auth
//!
//! Client-side authentication state for RoomBook.
//!
//! ## Modules
//!
//! - `jwt`: bearer token payload decoding, expiry checks, and an unsigned
//!   encoder for tooling
//! - `session`: the token/claims pair kept consistent across `set_token`,
//!   `logout`, and `initialize`
//! - `guard`: role and session checks applied before entering a page

pub mod guard;
pub mod jwt;
pub mod session;

pub use guard::{GlobalAuthCheck, GuardDecision, Route, RouteGuard};
pub use jwt::{TokenEncoder, TokenPayload, UserClaims, decode, is_expired};
pub use session::SessionManager;
