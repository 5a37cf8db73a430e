use std::fmt::Display;

use axum::http::StatusCode;

/// Handler for `GET /healthz`. Answers as long as the process serves HTTP.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map the outcome of a dependency check to a readiness status, logging the
/// failure against `dependency`.
pub fn readiness<E: Display>(dependency: &'static str, check: Result<(), E>) -> StatusCode {
    match check {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(dependency, error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
