//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

use roombook_auth::SessionManager;
use roombook_auth::jwt::TokenEncoder;
use roombook_core::config::{AppConfig, StoreConfig};
use roombook_core::traits::FixedClock;
use roombook_entity::user::UserRole;
use roombook_store::StoreManager;

/// Fixed "now" used throughout: 2025-05-17T12:00:00Z.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 17, 12, 0, 0).unwrap()
}

/// Test context with a file-backed store in a temporary directory.
pub struct TestEnv {
    /// Keeps the temporary directory alive
    pub dir: TempDir,
    /// Configuration pointing at the temporary store
    pub config: AppConfig,
    /// Clock shared by every session opened from this env
    pub clock: Arc<FixedClock>,
}

impl TestEnv {
    /// Create a new environment
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("state").join("session.json");
        let config = AppConfig {
            store: StoreConfig {
                provider: "file".to_string(),
                path: path.to_string_lossy().into_owned(),
            },
            ..AppConfig::default()
        };
        Self {
            dir,
            config,
            clock: Arc::new(FixedClock::new(now())),
        }
    }

    /// Open a session as a fresh process would
    pub fn open_session(&self) -> SessionManager {
        let store = StoreManager::new(&self.config.store).expect("Failed to open store");
        SessionManager::new(store.store(), self.clock.clone(), &self.config.auth)
            .expect("Failed to open session")
    }

    /// Issue a token valid for `ttl` from the env clock
    pub fn token(&self, role: UserRole, ttl: Duration) -> String {
        TokenEncoder::new(ttl.num_seconds())
            .expect("Failed to build encoder")
            .issue("user@example.com", role, Some("1001".to_string()), now())
            .expect("Failed to issue token")
    }
}
