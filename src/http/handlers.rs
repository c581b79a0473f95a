//! Route handlers.

use axum::http::StatusCode;

/// Liveness probe. Always succeeds, touches nothing external.
pub async fn healthz() -> &'static str {
    "ok"
}

/// Placeholder for upload presigning against the object store.
///
/// The capability is reserved but unbuilt; the real semantics
/// (credentials, expiry, store protocol) are future scope.
pub async fn presign_upload() -> (StatusCode, &'static str) {
    (StatusCode::NOT_IMPLEMENTED, "not implemented")
}
