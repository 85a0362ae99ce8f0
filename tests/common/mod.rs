//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;

use trace_logger::config::AppConfig;
use trace_logger::logger::{LogSink, Logger, Record};
use trace_logger::HttpServer;

/// Sink that captures records in memory for assertions.
#[derive(Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Record>>,
}

impl CaptureSink {
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl LogSink for CaptureSink {
    fn write(&self, record: &Record) {
        self.records.lock().unwrap().push(record.clone());
    }
}

/// Bind an ephemeral port, spawn the full server (middleware included), and
/// return its address.
pub async fn spawn_server(logger: Logger, project_id: &str) -> SocketAddr {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.logging.project_id = project_id.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, logger);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// HTTP client without connection pooling, so each test request is isolated.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
