//! HTTP middleware.
//!
//! Cross-cutting request interception: trace-context extraction and
//! per-request logger injection.

pub mod trace_logger;

pub use trace_logger::{trace_logger_middleware, TRACE_CONTEXT_HEADER, TRACE_ID_CONTEXT_KEY};
