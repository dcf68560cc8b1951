// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementations.
//!
//! This module contains the concrete implementation of the `ConfigurationService`
//! trait that boundary code talks to.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{ConfigurationServiceBuilder, DefaultConfigService};
