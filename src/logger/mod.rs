//! Structured logging subsystem.
//!
//! # Data Flow
//! ```text
//! Logger::new (root, at startup)
//!     → with(attrs) per request (trace reference, path)
//!     → scope::attach into request extensions
//!     → handler retrieves and logs
//!     → rewrite.rs (per-field schema adaptation)
//!     → sink.rs (one JSON object per line)
//!
//! On error():
//!     sink write (synchronous)
//!     → OnError hook (detached task, fire-and-forget)
//! ```
//!
//! # Design Decisions
//! - The error hook is constructor configuration, not ambient global state
//! - Derived loggers own their attributes and context map; nothing is shared
//!   mutably across requests, so no locking is needed
//! - The hook never delays or fails the request path: it runs after the sink
//!   write, on its own task, with panics contained at the task boundary

pub mod core;
pub mod level;
pub mod rewrite;
pub mod scope;
pub mod sink;

pub use self::core::{ErrorEvent, Logger, LoggerOpts, OnError};
pub use level::Level;
pub use rewrite::{stackdriver, RewriteAttr};
pub use scope::ScopedLogger;
pub use sink::{attr, Attr, LogSink, Record, StdoutSink};
