//! # roombook-store
//!
//! Key-value persistence backends behind
//! [`KeyValueStore`](roombook_core::traits::KeyValueStore):
//!
//! - **memory**: process-local map using [dashmap](https://crates.io/crates/dashmap)
//! - **file**: a single JSON object on disk, the CLI's stand-in for
//!   browser local storage
//!
//! The backend is selected at runtime from configuration.

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StoreManager;
