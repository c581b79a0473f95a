//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per inbound request
//! - Expose the header name used for correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Existing `x-request-id` headers are left untouched by the set
//!   layer, so upstream-supplied IDs survive

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 for each request that lacks an ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
