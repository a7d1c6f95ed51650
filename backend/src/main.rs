//! Main entry point for the Thamer gateway.
//!
//! Loads configuration from the environment, initializes tracing once, and
//! serves the axum application.

use anyhow::{Context, Result};
use tracing::info;

use backend::config::Config;
use backend::{app, init_tracing, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env().context("invalid gateway configuration")?;
    let addr = config.bind_addr;

    let state = AppState::new(config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, "thamer gateway listening");

    axum::serve(listener, router)
        .await
        .context("server terminated")?;
    Ok(())
}
