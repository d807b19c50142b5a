//! songlib-server - song library HTTP service
//!
//! Loads the TOML bootstrap config, opens the SQLite library and serves the
//! REST API until Ctrl+C or SIGTERM.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use songlib_common::config::{resolve_config_path, TomlConfig};
use songlib_common::db::init_database;
use songlib_server::services::LyricsApiClient;
use songlib_server::{build_router, logging, AppState};
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for songlib-server
#[derive(Parser, Debug)]
#[command(name = "songlib-server")]
#[command(about = "Song library REST service")]
#[command(version)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "SONGLIB_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long, env = "SONGLIB_PORT")]
    port: Option<u16>,

    /// SQLite database file (overrides config)
    #[arg(short, long, env = "SONGLIB_DB_PATH")]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let (mut config, config_found) = if config_path.exists() {
        let config = TomlConfig::load(&config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;
        (config, true)
    } else {
        (TomlConfig::default(), false)
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database_path = database;
    }

    logging::init_tracing(&config)?;

    info!(
        "Starting songlib-server v{} ({:?} environment)",
        env!("CARGO_PKG_VERSION"),
        config.env
    );
    if config_found {
        info!("Config: {}", config_path.display());
    } else {
        warn!(
            "Config file {} not found, using built-in defaults",
            config_path.display()
        );
    }

    info!("Database path: {}", config.database_path.display());
    let pool = init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    let lyrics = LyricsApiClient::new(
        config.lyrics_base_url(),
        Duration::from_secs(config.lyrics_api.timeout_secs),
    )
    .context("Failed to build song info client")?;
    info!("Song info service: {}", lyrics.info_url());

    let state = AppState::new(pool, Arc::new(lyrics), config.lyrics_api.serve_stub);
    let app = build_router(state);

    let addr = config.bind_addr();
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
