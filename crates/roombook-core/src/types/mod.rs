//! Shared value types.

pub mod id;

pub use id::{IdValue, normalize_id};
