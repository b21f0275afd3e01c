//! Bearer token CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use roombook_auth::jwt::{self, TokenEncoder, UserClaims};
use roombook_core::error::AppError;
use roombook_core::traits::{Clock, SystemClock};
use roombook_entity::user::UserRole;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Decode a token and show its claims
    Decode {
        /// The bearer token
        token: String,
    },
    /// Mint an unsigned token for local testing
    Mint {
        /// Account email (becomes `sub`)
        #[arg(short, long)]
        email: String,
        /// Role: STUDENT or ADMINISTRATOR
        #[arg(short, long, default_value = "STUDENT")]
        role: UserRole,
        /// Student number
        #[arg(long)]
        student_id: Option<String>,
        /// Lifetime in seconds
        #[arg(long, default_value_t = 3600)]
        ttl: i64,
    },
}

/// Claims display row
#[derive(Debug, Serialize, Tabled)]
pub struct ClaimsRow {
    /// Email
    pub email: String,
    /// Role
    pub role: String,
    /// Student ID
    pub student_id: String,
    /// Expires
    pub expires: String,
    /// Expired
    pub expired: bool,
}

impl ClaimsRow {
    /// Build a row for `claims` evaluated at `now_seconds`
    pub fn new(claims: &UserClaims, now_seconds: i64) -> Self {
        Self {
            email: claims.email.clone(),
            role: claims.role.to_string(),
            student_id: output::or_dash(claims.student_id.as_deref()),
            expires: output::or_dash(claims.expires_at().map(|t| t.to_rfc3339())),
            expired: claims.is_expired_at(now_seconds),
        }
    }
}

/// Execute token commands
pub fn execute(args: &TokenArgs, format: OutputFormat) -> Result<(), AppError> {
    let clock = SystemClock;

    match &args.command {
        TokenCommand::Decode { token } => {
            let claims = jwt::try_decode(token)?;
            output::print_row(&ClaimsRow::new(&claims, clock.now_seconds()), format);
        }
        TokenCommand::Mint {
            email,
            role,
            student_id,
            ttl,
        } => {
            let token =
                TokenEncoder::new(*ttl)?.issue(email, *role, student_id.clone(), clock.now())?;
            println!("{}", token);
        }
    }

    Ok(())
}
