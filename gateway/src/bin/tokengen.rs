//! tokengen - generates JWT authorization tokens that can be used to access
//! the protected endpoints of the gateway.

use std::process::ExitCode;

use clap::Parser;
use gateway_lib::tokengen::{self, TokenGenArgs};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tokengen=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = TokenGenArgs::parse();
    let stdout = std::io::stdout();

    match tokengen::run(&args, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to generate token: {e}");
            ExitCode::FAILURE
        }
    }
}
