// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log subscriber setup for the registry server.

use crate::server::settings::LogFormat;
use std::io;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither an explicit filter nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Builds the filter for the subscriber.
///
/// An explicit directive wins over `RUST_LOG`, which wins over [`DEFAULT_FILTER`]. An
/// explicit directive that does not parse falls back to the next source; its parse
/// error is returned alongside the filter so the caller can report it.
pub fn build_filter(explicit: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    let mut rejected = None;
    let explicit = explicit.and_then(|directive| match EnvFilter::try_new(directive) {
        Ok(filter) => Some(filter),
        Err(e) => {
            rejected = Some(e);
            None
        }
    });

    let filter = explicit
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    (filter, rejected)
}

/// Installs the global `tracing` subscriber, writing to stdout.
///
/// Calling this more than once is harmless; later calls leave the first subscriber in
/// place. An unparsable `filter` is reported as a warning once the subscriber is up.
pub fn init_logging(format: LogFormat, filter: Option<&str>) {
    let (env_filter, rejected) = build_filter(filter);
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Some(e) = rejected {
        tracing::warn!(
            filter = filter.unwrap_or_default(),
            error = %e,
            "ignoring invalid log filter"
        );
    }
}
