//! Session manager: keeps the (token, user) pair consistent.
//!
//! The pair is re-derived explicitly by [`SessionManager::set_token`],
//! [`SessionManager::logout`], and [`SessionManager::initialize`]. After
//! any of these returns, `user()` is `Some` iff a token is held that
//! decodes and is not expired.

use std::sync::Arc;

use tracing::{info, warn};

use roombook_core::config::AuthConfig;
use roombook_core::error::AppError;
use roombook_core::traits::{Clock, KeyValueStore};

use crate::jwt::{self, UserClaims};

/// Client-side authentication session.
pub struct SessionManager {
    /// Where the token is persisted between runs.
    store: Arc<dyn KeyValueStore>,
    /// Time source for expiry checks.
    clock: Arc<dyn Clock>,
    /// Persistence key for the token.
    token_key: String,
    /// Current bearer token.
    token: Option<String>,
    /// Claims derived from `token`.
    user: Option<UserClaims>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("token_key", &self.token_key)
            .field("has_token", &self.token.is_some())
            .field("user", &self.user)
            .finish()
    }
}

impl SessionManager {
    /// Creates a session and restores any persisted token.
    ///
    /// Runs [`initialize`](Self::initialize) before returning, so an
    /// expired or undecodable persisted token is already discarded.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: &AuthConfig,
    ) -> Result<Self, AppError> {
        let mut manager = Self {
            store,
            clock,
            token_key: config.token_key.clone(),
            token: None,
            user: None,
        };
        manager.initialize()?;
        Ok(manager)
    }

    /// Re-establishes the session invariant.
    ///
    /// 1. Load the persisted token if none is held
    /// 2. Expired (or undecodable) token: log out
    /// 3. Valid token without claims: derive them, logging out on failure
    pub fn initialize(&mut self) -> Result<(), AppError> {
        if self.token.is_none() {
            self.token = self.store.get(&self.token_key)?;
        }

        let Some(token) = self.token.as_deref() else {
            self.user = None;
            return Ok(());
        };

        if jwt::is_expired(token, self.clock.now_seconds()) {
            info!("Discarding expired session token");
            return self.logout();
        }

        if self.user.is_none() {
            match jwt::decode(token) {
                Some(claims) => {
                    info!(email = %claims.email, role = %claims.role, "Session restored");
                    self.user = Some(claims);
                }
                None => {
                    warn!("Persisted token could not be decoded; logging out");
                    return self.logout();
                }
            }
        }

        Ok(())
    }

    /// Replaces the token, persists it, and recomputes the claims.
    ///
    /// Passing `None` clears the token. A token that is malformed or
    /// expired is still stored, but leaves the user absent.
    pub fn set_token(&mut self, token: Option<String>) -> Result<(), AppError> {
        match token {
            Some(token) => {
                self.user = self.derive_claims(&token);
                let persisted = self.store.set(&self.token_key, &token);
                self.token = Some(token);
                persisted
            }
            None => {
                self.token = None;
                self.user = None;
                self.store.remove(&self.token_key)
            }
        }
    }

    /// Clears the token and claims and removes the persisted copy.
    pub fn logout(&mut self) -> Result<(), AppError> {
        if let Some(user) = self.user.take() {
            info!(email = %user.email, "Logged out");
        }
        self.token = None;
        self.store.remove(&self.token_key)
    }

    /// True iff a token is held and it is not expired right now.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_deref()
            .is_some_and(|t| !jwt::is_expired(t, self.clock.now_seconds()))
    }

    /// The current bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The current user, if the token is valid.
    pub fn user(&self) -> Option<&UserClaims> {
        self.user.as_ref()
    }

    /// Seconds until the current token expires (0 when absent or expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        self.user
            .as_ref()
            .map_or(0, |u| u.remaining_ttl_seconds(self.clock.now_seconds()))
    }

    fn derive_claims(&self, token: &str) -> Option<UserClaims> {
        let claims = jwt::decode(token)?;
        if claims.is_expired_at(self.clock.now_seconds()) {
            warn!(email = %claims.email, exp = claims.exp, "Token already expired");
            return None;
        }
        Some(claims)
    }
}
