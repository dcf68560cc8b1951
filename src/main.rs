// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `config-registry` server binary.

use clap::Parser;
use config_registry::server::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;

    server::init_logging(settings.log_format, settings.log_filter.as_deref());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        "starting configuration registry"
    );

    if let Err(e) = server::run(&settings).await {
        tracing::error!(error = %e, "configuration registry failed");
        return Err(e);
    }
    Ok(())
}
