//! Trace injection middleware.
//!
//! Derives the per-request logger from the root logger and the inbound
//! trace-context header, then attaches it to the request's extensions for
//! handlers to retrieve.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::http::server::AppState;
use crate::logger::{attr, scope};
use crate::trace::extract_trace_id;

/// Header carrying the inbound trace context.
pub const TRACE_CONTEXT_HEADER: &str = "x-cloud-trace-context";

/// Context-map key under which the raw trace ID is recorded on the derived
/// logger, for later retrieval by the error hook.
pub const TRACE_ID_CONTEXT_KEY: &str = "traceID";

/// Attach a per-request logger to the request's extensions.
///
/// With a valid trace header the logger is a child of the root carrying the
/// provider-formatted trace reference and the request path, with the raw
/// trace ID in its context map. With an absent or malformed header the root
/// logger passes through unchanged; the request proceeds either way.
pub async fn trace_logger_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let raw = req
        .headers()
        .get(TRACE_CONTEXT_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    let logger = match extract_trace_id(raw) {
        Some(trace_id) => {
            let mut derived = state.logger.with([
                attr(
                    "logging.googleapis.com/trace",
                    format!("projects/{}/traces/{}", state.project_id, trace_id),
                ),
                attr("path", req.uri().path()),
            ]);
            derived.set_context(TRACE_ID_CONTEXT_KEY, trace_id);
            derived
        }
        None => state.logger.clone(),
    };

    scope::attach(req.extensions_mut(), logger);

    next.run(req).await
}
