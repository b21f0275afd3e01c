//! Guard policies for entering pages.
//!
//! Each guard looks at the session and either lets navigation through or
//! names the page to redirect to.

use std::fmt;

use tracing::{debug, error};

use roombook_core::error::AppError;
use roombook_entity::user::UserRole;

use crate::session::SessionManager;

/// Paths reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/unauthorized"];

/// Redirect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login page.
    Login,
    /// The role-specific landing page.
    Dashboard,
    /// Shown when the role does not allow the page.
    Unauthorized,
}

impl Route {
    /// The route's path.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Unauthorized => "/unauthorized",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested page.
    Allow,
    /// Navigate to the given route instead.
    Redirect(Route),
}

/// Per-page guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Logs out and sends to login when the held token has expired.
    Auth,
    /// Login-style pages: an authenticated user goes to the dashboard.
    Guest,
    /// Administrator-only pages.
    Admin,
    /// Student-only pages.
    Student,
    /// Pages for any signed-in role.
    StudentOrAdmin,
}

impl RouteGuard {
    /// Evaluates the guard. Only [`RouteGuard::Auth`] mutates the session.
    pub fn check(&self, session: &mut SessionManager) -> Result<GuardDecision, AppError> {
        let role = session.user().map(|u| u.role);
        let decision = match self {
            Self::Auth => {
                if session.token().is_some() && !session.is_authenticated() {
                    session.logout()?;
                    GuardDecision::Redirect(Route::Login)
                } else {
                    GuardDecision::Allow
                }
            }
            Self::Guest => {
                if session.is_authenticated() {
                    GuardDecision::Redirect(Route::Dashboard)
                } else {
                    GuardDecision::Allow
                }
            }
            Self::Admin => require_role(role, |r| r == UserRole::Administrator),
            Self::Student => require_role(role, |r| r == UserRole::Student),
            Self::StudentOrAdmin => require_role(role, |_| true),
        };
        debug!(guard = ?self, ?decision, "Route guard evaluated");
        Ok(decision)
    }

    /// Like [`check`](Self::check), but turns a redirect into an error.
    pub fn require(&self, session: &mut SessionManager) -> Result<(), AppError> {
        match self.check(session)? {
            GuardDecision::Allow => Ok(()),
            GuardDecision::Redirect(Route::Login) => {
                Err(AppError::authentication("Session expired; please log in again"))
            }
            GuardDecision::Redirect(Route::Dashboard) => {
                Err(AppError::validation("Already logged in"))
            }
            GuardDecision::Redirect(Route::Unauthorized) => Err(AppError::authorization(
                format!("Guard {self:?} denied access"),
            )),
        }
    }
}

fn require_role(role: Option<UserRole>, allowed: impl Fn(UserRole) -> bool) -> GuardDecision {
    match role {
        Some(r) if allowed(r) => GuardDecision::Allow,
        _ => GuardDecision::Redirect(Route::Unauthorized),
    }
}

/// The check run before every navigation.
///
/// Re-establishes the session invariant; if that drops a held token and
/// the target is not public, the user is sent to the login page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAuthCheck;

impl GlobalAuthCheck {
    /// Evaluates the check for navigation to `path`.
    pub fn evaluate(&self, session: &mut SessionManager, path: &str) -> GuardDecision {
        let had_token = session.token().is_some();
        let is_public = PUBLIC_PATHS.contains(&path);

        if let Err(e) = session.initialize() {
            error!(error = %e, "Auth initialization error");
            if let Err(e) = session.logout() {
                error!(error = %e, "Logout after failed initialization also failed");
            }
            return redirect_unless_public(is_public);
        }

        if had_token && session.token().is_none() {
            return redirect_unless_public(is_public);
        }
        GuardDecision::Allow
    }
}

fn redirect_unless_public(is_public: bool) -> GuardDecision {
    if is_public {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}
