//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file plus `ROOMBOOK__`-prefixed environment variables.
//! Every field carries a default, so an empty configuration is valid.

pub mod auth;
pub mod booking;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::booking::{BookingConfig, DEFAULT_CUTOFF};
pub use self::logging::LoggingConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token handling settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Key-value persistence settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Slot validation settings.
    #[serde(default)]
    pub booking: BookingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Environment variables use the `ROOMBOOK` prefix and `__` as the
    /// section separator, e.g. `ROOMBOOK__BOOKING__CUTOFF_HOUR=18`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix("ROOMBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
