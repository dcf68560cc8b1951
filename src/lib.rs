// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory key-value configuration registry served over HTTP.
//!
//! Clients create, read, update and delete configuration records, each an
//! `{id, name, value}` triple stored under a caller-supplied ID.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigId`, `ConfigurationRecord`), the error
//!   taxonomy and the `ConfigurationService` trait
//! - **Ports**: The `ConfigStore` trait every storage backend implements
//! - **Adapters**: The in-memory store and the axum HTTP boundary
//! - **Service**: `DefaultConfigService`, which delegates to a store and gives its
//!   failures operation-specific context
//! - **Server**: Settings, logging and the listener used by the binary
//!
//! # Feature Flags
//!
//! - `yaml`: Read server settings from YAML files (default)
//! - `cli`: Command-line parsing and the `config-registry` binary (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use config_registry::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let service = DefaultConfigService::new();
//! let id = ConfigId::from("test1");
//!
//! service.create(&id, "Test Configuration 1", "test-1")?;
//! assert_eq!(service.list_all()?.len(), 1);
//!
//! let err = service.create(&id, "Test Configuration 1", "test-1").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::AlreadyExists);
//! # Ok(())
//! # }
//! ```
//!
//! Serving the registry over HTTP:
//!
//! ```rust,no_run
//! use config_registry::server::{self, ServerSettings};
//!
//! # async fn start() -> anyhow::Result<()> {
//! server::run(&ServerSettings::default()).await
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod server;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::InMemoryStore;
    pub use crate::domain::{
        ConfigId, ConfigurationRecord, ConfigurationService, ErrorKind, ServiceError,
        ServiceResult, StoreError, StoreResult,
    };
    pub use crate::ports::ConfigStore;
    pub use crate::service::{ConfigurationServiceBuilder, DefaultConfigService};
}
