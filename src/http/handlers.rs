//! Example HTTP handlers.
//!
//! Handlers retrieve the per-request logger via the [`ScopedLogger`]
//! extractor. When the injection middleware did not run, the extractor
//! rejects with a 500 and a descriptive body; the propagation layer never
//! aborts on its own.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::logger::ScopedLogger;

/// Health check. Demonstrates leveled logging through the scoped logger.
pub async fn health(ScopedLogger(logger): ScopedLogger) -> impl IntoResponse {
    logger.debug("healthcheck requested", &[]);
    logger.info("healthy", &[]);

    (StatusCode::OK, "OK")
}

#[derive(Debug, thiserror::Error)]
#[error("simulated upstream failure")]
struct SimulatedFailure;

/// Demo error path. Emits a warning and an error record; the error record
/// also fires the configured error hook.
pub async fn fail(ScopedLogger(logger): ScopedLogger) -> impl IntoResponse {
    logger.warning("about to fail", &[]);
    let err = SimulatedFailure;
    logger.error("request failed", &err, &[]);

    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
