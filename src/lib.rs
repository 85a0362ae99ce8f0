//! Request-scoped structured logging for an Axum HTTP service.
//!
//! # Architecture Overview
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                 SERVICE                     │
//!                    │                                             │
//!   Client Request   │  ┌──────────┐   ┌─────────────┐            │
//!   ─────────────────┼─▶│  http    │──▶│ middleware/  │            │
//!   X-Cloud-Trace-   │  │  server  │   │ trace_logger │            │
//!   Context header   │  └──────────┘   └──────┬──────┘            │
//!                    │                        │ derive + attach    │
//!                    │                        ▼                    │
//!                    │                 ┌─────────────┐            │
//!                    │                 │   logger    │            │
//!                    │                 │ (scoped per │            │
//!                    │                 │  request)   │            │
//!                    │                 └──────┬──────┘            │
//!                    │      handler logs      │                    │
//!                    │                        ▼                    │
//!   Client Response  │   JSON lines on stdout; on error() an      │
//!   ◀────────────────┼── OnError hook fires on a detached task    │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! The logger core ([`logger`]) is framework-agnostic; [`trace`] parses the
//! inbound trace-context header; [`http`] wires both into an Axum router.

// Core subsystems
pub mod config;
pub mod http;
pub mod logger;
pub mod trace;

pub use config::AppConfig;
pub use http::HttpServer;
pub use logger::{attr, Level, Logger, LoggerOpts, ScopedLogger};
pub use trace::extract_trace_id;
