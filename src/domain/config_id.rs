// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration identifier newtype.
//!
//! This module provides the `ConfigId` type, the key under which a configuration
//! record is stored. Wrapping the caller-supplied string keeps identifiers from being
//! mixed up with record names and values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for configuration record identifiers.
///
/// Identifiers are opaque caller-supplied strings. They order lexicographically,
/// which is the order the in-memory store lists records in.
///
/// # Examples
///
/// ```
/// use config_registry::domain::ConfigId;
///
/// let id = ConfigId::from("feature-flags");
/// assert_eq!(id.as_str(), "feature-flags");
/// assert!(!id.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    /// Creates a new `ConfigId` from a `String`.
    pub fn new(id: String) -> Self {
        ConfigId(id)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the `ConfigId` into its inner `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_registry::domain::ConfigId;
    ///
    /// let id = ConfigId::from("test1");
    /// assert_eq!(id.into_string(), "test1");
    /// ```
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigId {
    fn from(s: String) -> Self {
        ConfigId(s)
    }
}

impl From<&str> for ConfigId {
    fn from(s: &str) -> Self {
        ConfigId(s.to_string())
    }
}

impl From<ConfigId> for String {
    fn from(id: ConfigId) -> Self {
        id.0
    }
}

impl AsRef<str> for ConfigId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
