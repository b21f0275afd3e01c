//! # roombook-entity
//!
//! Domain value objects for RoomBook. Every type here is either read
//! from the remote API, handed to it, or derived from a bearer token.
//! Entities derive `Debug`, `Clone`, and, where they cross the wire,
//! `Serialize`/`Deserialize` in the API's camelCase shape.

pub mod booking;
pub mod facility;
pub mod user;
