// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server bootstrap: settings, logging and the HTTP listener.
//!
//! The store and service are created once per server and shared with every request
//! handler through the router state.

pub mod logging;
pub mod settings;

pub use logging::init_logging;
#[cfg(feature = "cli")]
pub use settings::Cli;
pub use settings::{LogFormat, ServerSettings, SettingsError, SettingsOverrides};

use crate::adapters::http;
use crate::domain::ConfigurationService;
use crate::service::DefaultConfigService;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the configuration API on `listener` until `shutdown` completes.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    service: Arc<dyn ConfigurationService>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = http::router(service);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Serves the configuration API on `listener` until Ctrl+C is received.
pub async fn serve(
    listener: TcpListener,
    service: Arc<dyn ConfigurationService>,
) -> std::io::Result<()> {
    serve_with_shutdown(listener, service, shutdown_signal()).await
}

/// Builds a registry with an empty in-memory store and serves it at the configured
/// address.
pub async fn run(settings: &ServerSettings) -> anyhow::Result<()> {
    let addr = settings.socket_addr()?;
    let service = DefaultConfigService::builder()
        .with_in_memory_store()
        .build();

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, store = service.store().name(), "configuration registry listening");

    serve(listener, Arc::new(service)).await?;
    tracing::info!("configuration registry stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for Ctrl+C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
