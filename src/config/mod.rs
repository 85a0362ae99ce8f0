//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / environment (PORT, PROJECT_ID, LOG_LEVEL)
//!     → main.rs (clap parse)
//!     → AppConfig (schema.rs)
//!     → validation.rs (semantic checks)
//!     → handed to HttpServer and root Logger construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; no hot reload
//! - All fields have defaults so a bare environment still boots
//! - Validation returns every error found, not just the first

pub mod schema;
pub mod validation;

pub use schema::{AppConfig, ListenerConfig, LoggingConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
