//! Key-value persistence trait for pluggable storage media.

use crate::result::AppResult;

/// A minimal string key-value store.
///
/// This is the only persistence seam the session manager knows about.
/// Browser local storage, cookies, a JSON file, or a plain in-memory map
/// all fit behind it.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Get a value by key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}
