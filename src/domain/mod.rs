// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the configuration record, its identifier, the error taxonomy
//! and the service trait. It is independent of storage and transport concerns.

pub mod config_id;
pub mod errors;
pub mod record;
pub mod service;

// Re-export commonly used types
pub use config_id::ConfigId;
pub use errors::{ErrorKind, ServiceError, ServiceResult, StoreError, StoreResult};
pub use record::ConfigurationRecord;
pub use service::ConfigurationService;
