//! Lichess bot bootstrap.
//!
//! Logs in against the Lichess API with credentials from the environment
//! and, when an engine path is configured, brings a local UCI engine up to
//! readiness. `--bestmove` additionally runs one timed search from the
//! starting position.

mod api;
mod auth;
mod config;
mod engine;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::LichessClient;
use config::Config;
use engine::{Position, UciEngine, UciProcess};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();

    let mut client = LichessClient::with_base_url(config.credentials(), &config.base_url)?;
    client.login().await?;

    let Some(engine_path) = &config.engine_path else {
        return Ok(());
    };

    let mut engine = UciProcess::spawn(engine_path)?;
    engine.init().await?;
    engine.is_ready().await?;
    info!(
        name = engine.name().unwrap_or("<unidentified>"),
        "Engine ready"
    );

    if std::env::args().any(|arg| arg == "--bestmove") {
        engine.set_position(&Position::Startpos).await?;
        let result = engine.go(config.engine_movetime_ms).await?;
        info!(best_move = %result.best_move, ponder = ?result.ponder, "Search complete");
    }

    engine.quit().await?;
    Ok(())
}
