//! Request-scoped logger propagation.
//!
//! The injection middleware attaches one derived [`Logger`] to each request's
//! extensions; handlers retrieve it from there. Retrieval is a checked
//! operation: a missing logger is an observable per-request condition the
//! handler decides how to degrade from, never a panic.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{Extensions, StatusCode};

use crate::logger::core::Logger;

/// The per-request logger, as stored in request extensions.
///
/// Doubles as an axum extractor; extraction rejects with a 500 and a
/// descriptive body when the injection middleware did not run.
#[derive(Clone)]
pub struct ScopedLogger(pub Logger);

/// Attach `logger` to a request's extensions.
///
/// Exactly one logger is associated per request; attaching again replaces it.
pub fn attach(extensions: &mut Extensions, logger: Logger) {
    extensions.insert(ScopedLogger(logger));
}

/// Retrieve the logger attached to a request, if any.
pub fn retrieve(extensions: &Extensions) -> Option<Logger> {
    extensions.get::<ScopedLogger>().map(|s| s.0.clone())
}

impl<S> FromRequestParts<S> for ScopedLogger
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        retrieve(&parts.extensions)
            .map(ScopedLogger)
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "logger not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::core::LoggerOpts;
    use crate::logger::level::Level;

    fn test_logger() -> Logger {
        let mut l = Logger::new(LoggerOpts {
            level: Level::Debug,
            rewrite: None,
            on_error: None,
        });
        l.set_context("traceID", "abc123");
        l
    }

    #[test]
    fn attach_then_retrieve_round_trips() {
        let mut extensions = Extensions::new();
        attach(&mut extensions, test_logger());

        let retrieved = retrieve(&extensions).expect("logger attached");
        assert_eq!(retrieved.context("traceID"), Some("abc123"));
    }

    #[test]
    fn retrieve_without_attach_is_none() {
        let extensions = Extensions::new();
        assert!(retrieve(&extensions).is_none());
    }

    #[test]
    fn attach_replaces_previous_logger() {
        let mut extensions = Extensions::new();
        attach(&mut extensions, test_logger());

        let mut second = test_logger();
        second.set_context("traceID", "ffff00");
        attach(&mut extensions, second);

        let retrieved = retrieve(&extensions).expect("logger attached");
        assert_eq!(retrieved.context("traceID"), Some("ffff00"));
    }
}
