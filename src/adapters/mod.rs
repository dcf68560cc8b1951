// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing store backends and the HTTP boundary.
//!
//! Store adapters implement the `ConfigStore` port. The HTTP adapter drives the
//! configuration service from incoming requests.

pub mod http;
pub mod memory;

// Re-export commonly used types
pub use memory::InMemoryStore;
