// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use config_registry::domain::ConfigurationService;
use config_registry::server;
use config_registry::service::DefaultConfigService;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A registry server running on an ephemeral local port.
#[allow(dead_code)]
pub struct TestServer {
    pub base_url: String,
    pub service: Arc<DefaultConfigService>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<std::io::Result<()>>>,
}

#[allow(dead_code)]
impl TestServer {
    /// Starts a server backed by a fresh in-memory store.
    pub async fn start() -> TestServer {
        let service = Arc::new(DefaultConfigService::new());
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let shared: Arc<dyn ConfigurationService> = service.clone();
        let handle = tokio::spawn(server::serve_with_shutdown(listener, shared, async move {
            let _ = rx.await;
        }));

        TestServer {
            base_url: format!("http://{}", addr),
            service,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// Returns the absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stops the server and waits for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.unwrap().unwrap();
        }
    }
}

/// Returns a plain HTTP client.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Builds a JSON request body.
#[allow(dead_code)]
pub fn body(name: &str, value: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "value": value })
}
