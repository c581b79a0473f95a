//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → handlers.rs (route-specific handling)
//!     → Send response to client (request ID propagated)
//! ```
//!
//! # Design Decisions
//! - Request ID added as the outermost layer so every span carries it
//! - Panics in handlers become 500 responses; the process keeps serving
//! - A fixed 60s budget bounds handler execution per request

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
