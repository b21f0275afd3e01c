//! Auth session CLI commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use roombook_auth::{GlobalAuthCheck, GuardDecision, RouteGuard, SessionManager};
use roombook_core::config::AppConfig;
use roombook_core::error::AppError;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Store a token as the current session
    Login {
        /// The bearer token
        token: String,
    },
    /// Show the current session
    Status,
    /// Clear the current session
    Logout,
    /// Evaluate a page guard against the current session
    Guard {
        /// Guard to evaluate
        #[arg(value_enum)]
        guard: GuardKind,
        /// Path being navigated to
        #[arg(long, default_value = "/dashboard")]
        path: String,
    },
}

/// Page guards selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GuardKind {
    /// Expired sessions are sent to login
    Auth,
    /// Signed-in users are sent to the dashboard
    Guest,
    /// Administrators only
    Admin,
    /// Students only
    Student,
    /// Any signed-in role
    StudentOrAdmin,
}

impl From<GuardKind> for RouteGuard {
    fn from(kind: GuardKind) -> Self {
        match kind {
            GuardKind::Auth => Self::Auth,
            GuardKind::Guest => Self::Guest,
            GuardKind::Admin => Self::Admin,
            GuardKind::Student => Self::Student,
            GuardKind::StudentOrAdmin => Self::StudentOrAdmin,
        }
    }
}

/// Session display row
#[derive(Debug, Serialize, Tabled)]
pub struct SessionRow {
    /// Authenticated
    pub authenticated: bool,
    /// Email
    pub email: String,
    /// Role
    pub role: String,
    /// Student ID
    pub student_id: String,
    /// Remaining (s)
    pub remaining_seconds: u64,
}

impl From<&SessionManager> for SessionRow {
    fn from(session: &SessionManager) -> Self {
        let user = session.user();
        Self {
            authenticated: session.is_authenticated(),
            email: output::or_dash(user.map(|u| u.email.as_str())),
            role: output::or_dash(user.map(|u| u.role)),
            student_id: output::or_dash(user.and_then(|u| u.student_id.as_deref())),
            remaining_seconds: session.remaining_ttl_seconds(),
        }
    }
}

/// Guard evaluation row
#[derive(Debug, Serialize, Tabled)]
pub struct GuardRow {
    /// Path
    pub path: String,
    /// Guard
    pub guard: String,
    /// Decision
    pub decision: String,
}

/// Execute session commands
pub fn execute(
    args: &SessionArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = super::open_session(config)?;

    match &args.command {
        SessionCommand::Login { token } => {
            session.set_token(Some(token.clone()))?;
            if session.is_authenticated() {
                output::print_success("Session stored");
                output::print_row(&SessionRow::from(&session), format);
            } else {
                output::print_warning("Token stored, but it is expired or cannot be decoded");
            }
        }
        SessionCommand::Status => {
            output::print_row(&SessionRow::from(&session), format);
        }
        SessionCommand::Logout => {
            session.logout()?;
            output::print_success("Logged out");
        }
        SessionCommand::Guard { guard, path } => {
            let decision = match GlobalAuthCheck.evaluate(&mut session, path) {
                GuardDecision::Allow => RouteGuard::from(*guard).check(&mut session)?,
                redirect => redirect,
            };
            let row = GuardRow {
                path: path.clone(),
                guard: format!("{:?}", guard),
                decision: match decision {
                    GuardDecision::Allow => "allow".to_string(),
                    GuardDecision::Redirect(route) => format!("redirect {}", route),
                },
            };
            output::print_row(&row, format);
        }
    }

    Ok(())
}
