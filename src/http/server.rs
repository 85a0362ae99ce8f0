//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all routes
//! - Wire up middleware (trace injection, request timeout)
//! - Serve on a caller-provided listener with graceful shutdown

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::trace_logger_middleware;
use crate::logger::Logger;

/// State injected into the trace middleware.
#[derive(Clone)]
pub struct AppState {
    /// Root logger; the middleware derives one child per request from it.
    pub logger: Logger,
    /// Project identifier for provider-formatted trace references.
    pub project_id: String,
}

/// HTTP server for the logging demo service.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and root logger.
    pub fn new(config: AppConfig, logger: Logger) -> Self {
        let state = AppState {
            logger,
            project_id: config.logging.project_id.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::health))
            .route("/healthcheck", get(handlers::health))
            .route("/fail", get(handlers::fail))
            .layer(middleware::from_fn_with_state(
                state,
                trace_logger_middleware,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
