//! Thamer gateway: session cookies, token gate, and core-API proxying.
//!
//! The gateway sits between browsers and the Thamer core REST API. It owns
//! the role-scoped session cookies (`userToken`, `adminToken`), enforces
//! the token gate on every portal path, and exposes thin `/api` proxy
//! routes that forward bearer tokens upstream. All business state lives in
//! the core API; this process is stateless apart from configuration.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::middleware::from_fn;
use axum::Router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::CoreApi;

/// Shared application state. Cloned per request; everything inside is
/// either `Arc`ed or internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub core: CoreApi,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let core = CoreApi::new(&config);
        Self {
            config: Arc::new(config),
            core,
        }
    }
}

/// One-time tracing initialization, called from the binary entry point
/// before anything else runs. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Assembles the full gateway router. The token gate wraps everything,
/// including unmatched paths, so a protected prefix redirects before any
/// routing (or 404 handling) happens; request tracing wraps the gate.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(auth::routes::session_router())
        .nest("/api", api::router())
        .layer(from_fn(auth::middleware::token_gate))
        .layer(from_fn(middleware::trace_requests))
        .with_state(state)
}
