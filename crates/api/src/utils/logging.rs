//! Request logging
//!
//! Every request gets an id and a structured outcome line. The helper keeps
//! the route handlers free of observability plumbing; handlers must avoid
//! forwarding sensitive values in the logged fields.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use painel_domain::PainelError;
use tracing::{info, warn};
use uuid::Uuid;

/// Middleware attaching a request id and logging the outcome
pub async fn request_context(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%request_id, %method, path = %path, %status, duration_ms, "request_failed");
    } else {
        info!(%request_id, %method, path = %path, %status, duration_ms, "request_completed");
    }

    response
}

/// Convert a `PainelError` into a stable label suitable for metrics/logging
#[inline]
#[must_use]
pub fn error_label(error: &PainelError) -> &'static str {
    match error {
        PainelError::Provider(_) => "provider",
        PainelError::Profile(_) => "profile",
        PainelError::Validation(_) => "validation",
        PainelError::Conflict(_) => "conflict",
        PainelError::Config(_) => "config",
        PainelError::Storage(_) => "storage",
        PainelError::Network(_) => "network",
        PainelError::NotFound(_) => "not_found",
        PainelError::Internal(_) => "internal",
    }
}
