//! # roombook-core
//!
//! Core crate for RoomBook. Contains the unified error system,
//! configuration schemas, the persistence and clock traits, and
//! identifier normalisation helpers.
//!
//! This crate has **no** internal dependencies on other RoomBook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
