//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, panic recovery, timeout)
//! - Bind server to listener and serve until process exit

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;

/// Upper bound on total handler execution time per request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP server for the upload API.
pub struct HttpServer {
    router: Router,
    config: Config,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let router = layered(routes(), REQUEST_TIMEOUT);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process exits; there is no graceful-shutdown
    /// path in this skeleton.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            env = %self.config.env,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }
}

/// Route table. Each request is independent; no state is shared.
fn routes() -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/upload/presign", post(handlers::presign_upload))
}

/// Apply the middleware stack.
///
/// Outermost to innermost: assign request ID, propagate it onto the
/// response, trace, recover panics into 500s, enforce the timeout.
/// Axum runs the last-added layer first, hence the reversed chain.
fn layered(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
