//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → middleware/trace_logger.rs (extract trace ID, derive + attach logger)
//!     → handlers.rs (retrieve scoped logger, log, respond)
//!     → response (never waits on the error hook)
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
