//! Store manager that selects the backend from configuration.

use std::sync::Arc;

use tracing::info;

use roombook_core::config::StoreConfig;
use roombook_core::error::AppError;
use roombook_core::traits::store::KeyValueStore;

/// Owns the configured key-value backend.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn KeyValueStore>,
    provider: String,
}

impl StoreManager {
    /// Build the store described by `config`.
    pub fn new(config: &StoreConfig) -> Result<Self, AppError> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            #[cfg(feature = "memory")]
            "memory" => Arc::new(crate::memory::MemoryStore::new()),
            #[cfg(feature = "file")]
            "file" => Arc::new(crate::file::FileStore::open(&config.path)?),
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'"
                )));
            }
        };
        info!(provider = %config.provider, "Key-value store initialized");
        Ok(Self {
            inner,
            provider: config.provider.clone(),
        })
    }

    /// The shared store handle.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner)
    }

    /// Name of the active provider.
    pub fn provider(&self) -> &str {
        &self.provider
    }
}
