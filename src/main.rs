//! Upload API service (v1)
//!
//! HTTP skeleton for the upload service, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ────────────────▶ http/server.rs (Axum router)
//!                           │
//!                           ▼
//!                   middleware stack
//!                   (request ID → trace → panic recovery → timeout)
//!                           │
//!                           ▼
//!                   http/handlers.rs
//!                   (GET /healthz, POST /upload/presign)
//!
//!     Cross-cutting: config (env vars, loaded once at startup)
//! ```
//!
//! # Current Status
//!
//! Implements the service skeleton:
//! - Environment-based configuration with defaults
//! - Request ID generation (UUID v4) and response propagation
//! - Request timeout (60s) and panic recovery
//! - Liveness probe
//! - Presign endpoint reserved but unimplemented (501)

pub mod config;
pub mod http;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upload_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("upload-api v0.1.0 starting");

    // Load configuration from the environment (cannot fail; defaults apply)
    let config = Config::load();

    tracing::info!(
        env = %config.env,
        http_port = %config.http_port,
        "Configuration loaded"
    );

    // Bind TCP listener; a malformed or occupied port fails here
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
