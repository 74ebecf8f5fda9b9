//! Gateway main entry point
//!
//! Serves the public, authenticated and admin-only endpoints over HTTP.

use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::{app_router, AppState, GatewayConfig};

async fn run_server(config_path: PathBuf) -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?
        .with_env_overrides();
    tracing::info!("Starting Gateway v{}", config.version);

    let state = AppState::new(config.secret())?;

    let listener = tokio::net::TcpListener::bind(&config.http_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.http_addr))?;
    tracing::info!("HTTP server listening on {}", config.http_addr);

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,gateway_lib=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path = GatewayConfig::path_from_env();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "run" => {}
            "--config" => {
                let path = rest.next().context("--config requires a path")?;
                config_path = PathBuf::from(path);
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => bail!("Unknown argument: {other} (see --help)"),
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config_path))
}

fn print_help() {
    println!("Gateway v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    gateway [run] [--config <path>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>    Configuration file (default: Configuration.json,");
    println!("                       or $GATEWAY_CONFIG when set)");
    println!("    -h, --help         Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    HTTP_ADDR          Listen address (overrides httpAddr in the configuration)");
    println!("    RUST_LOG           Log filter (default: gateway=info)");
}
