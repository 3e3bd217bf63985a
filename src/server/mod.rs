//! HTTP server — Axum wiring for the betgen endpoints.
//!
//! Builds the router, applies CORS, and serves until shutdown.
//! The service is stateless: the router carries no shared state.

pub mod routes;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::ServiceConfig;

/// Build the Axum router with all routes and middleware.
pub fn build_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/internal/betgen/score", post(routes::score))
        .route("/health", get(routes::health))
        .layer(cors)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(cfg: &ServiceConfig) -> Result<()> {
    let addr = cfg.bind_addr()?;
    let app = build_router();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "betgen listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received.");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
