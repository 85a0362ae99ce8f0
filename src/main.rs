use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use trace_logger::config::{validate_config, AppConfig};
use trace_logger::http::middleware::TRACE_ID_CONTEXT_KEY;
use trace_logger::logger::{stackdriver, ErrorEvent, Logger, LoggerOpts};
use trace_logger::HttpServer;

#[derive(Parser)]
#[command(name = "trace-logger", about = "HTTP demo service with request-scoped structured logging")]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Cloud project identifier used in trace references.
    #[arg(long, env = "PROJECT_ID", default_value = "")]
    project_id: String,

    /// Minimum severity emitted (debug|info|warn|error).
    #[arg(long, env = "LOG_LEVEL", default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::default();
    config.listener.bind_address = format!("0.0.0.0:{}", cli.port);
    config.logging.level = cli.log_level.parse()?;
    config.logging.project_id = cli.project_id;

    if let Err(errors) = validate_config(&config) {
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(format!("invalid configuration: {}", rendered.join(", ")).into());
    }

    let logger = Logger::new(LoggerOpts {
        level: config.logging.level,
        rewrite: Some(stackdriver()),
        on_error: Some(Arc::new(|event: ErrorEvent| {
            // Post-error reporting goes here (e.g. forward to Sentry). The
            // request that triggered it is identified by the trace ID in the
            // logger's context map.
            match event.logger.context(TRACE_ID_CONTEXT_KEY) {
                Some(trace_id) => {
                    eprintln!("error reported for trace {}: {}", trace_id, event.message)
                }
                None => eprintln!("error reported: {}", event.message),
            }
        })),
    });

    logger.debug("serving...", &[]);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, logger);
    server.run(listener).await?;

    Ok(())
}
