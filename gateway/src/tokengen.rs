//! Token generation for the `tokengen` command.
//!
//! Reads the gateway configuration and mints a token that the protected
//! endpoints will accept.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use error::AppError;

use crate::config::{GatewayConfig, CONFIG_FILENAME};

/// Generate JWT authorization tokens for the gateway's protected endpoints.
#[derive(Debug, Clone, Parser)]
#[command(name = "tokengen", version)]
pub struct TokenGenArgs {
    /// The username to put in the token
    #[arg(long, default_value = "guest")]
    pub username: String,

    /// Seconds before the token expires
    #[arg(long, default_value_t = 1200, allow_negative_numbers = true)]
    pub time: i64,

    /// Mark the user as a privileged admin user
    #[arg(long)]
    pub admin: bool,

    /// The configuration file
    #[arg(long, default_value = CONFIG_FILENAME, env = "GATEWAY_CONFIG")]
    pub config: PathBuf,

    /// No verbose output, only the token
    #[arg(long, visible_alias = "quiet")]
    pub quite: bool,
}

/// Mint a token as described by `args` and write it to `out`.
///
/// Unless `quite` is set, progress lines are written before the token.
pub fn run(args: &TokenGenArgs, out: &mut impl Write) -> Result<String, AppError> {
    if !args.quite {
        say(out, &format!("Reading {} ...", args.config.display()))?;
    }
    let config = GatewayConfig::load(&args.config)?;

    if !args.quite {
        say(out, "Generating Token ...")?;
    }
    let token = auth::encode_token(&args.username, args.admin, args.time, config.secret())?;

    if !args.quite {
        say(out, "JWT Authentication Token:")?;
    }
    say(out, &token)?;

    Ok(token)
}

fn say(out: &mut impl Write, line: &str) -> Result<(), AppError> {
    writeln!(out, "{line}").map_err(|e| AppError::Internal(e.to_string()))
}
