//! Core traits defined in `roombook-core` and implemented by other crates.

pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::KeyValueStore;
