// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server settings.
//!
//! Settings are layered with the precedence command line > environment > YAML file >
//! built-in defaults. Each layer is a [`SettingsOverrides`] whose unset fields leave
//! the lower layers in place.

use directories::ProjectDirs;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum allowed size of a settings file (1MB).
const MAX_SETTINGS_FILE_SIZE: u64 = 1024 * 1024;

/// Default host the server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the server binds to.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file '{}': {source}", .path.display())]
    Io {
        /// The file that was read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The settings file exceeds the size limit.
    #[error("Settings file '{}' is too large ({size} bytes, max {max} bytes)", .path.display())]
    FileTooLarge {
        /// The file that was read
        path: PathBuf,
        /// The file size in bytes
        size: u64,
        /// The size limit in bytes
        max: u64,
    },

    /// The settings file is not valid.
    #[error("Failed to parse settings: {message}")]
    Parse {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The host and port do not form a socket address.
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        /// The rejected address
        addr: String,
        /// The underlying parsing error
        source: std::net::AddrParseError,
    },
}

/// Output format of the log subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

/// Fully resolved server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    /// Host or IP address to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
    /// Log output format
    pub log_format: LogFormat,
    /// Explicit `tracing` filter directive, overriding `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            log_filter: None,
        }
    }
}

impl ServerSettings {
    /// Resolves settings from an optional YAML file and higher-priority overrides.
    ///
    /// With `config_path` set, the file must exist. Without it, `config.yaml` in the
    /// platform configuration directory is used when present.
    pub fn load(
        config_path: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        let file_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.is_file()),
        };
        if let Some(path) = file_path {
            settings = settings.apply(&SettingsOverrides::from_file(&path)?);
        }

        Ok(settings.apply(overrides))
    }

    /// Returns a copy of these settings with every field set in `layer` replaced.
    pub fn apply(mut self, layer: &SettingsOverrides) -> Self {
        if let Some(host) = &layer.host {
            self.host = host.clone();
        }
        if let Some(port) = layer.port {
            self.port = port;
        }
        if let Some(format) = layer.log_format {
            self.log_format = format;
        }
        if let Some(filter) = &layer.log_filter {
            self.log_filter = Some(filter.clone());
        }
        self
    }

    /// Parses the listen address.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_registry::server::ServerSettings;
    ///
    /// let addr = ServerSettings::default().socket_addr().unwrap();
    /// assert_eq!(addr.to_string(), "127.0.0.1:8080");
    /// ```
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let addr = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        };
        addr.parse()
            .map_err(|source| SettingsError::InvalidAddress { addr, source })
    }
}

/// One layer of settings; unset fields defer to lower layers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    /// Host or IP address to bind
    pub host: Option<String>,
    /// TCP port to bind
    pub port: Option<u16>,
    /// Log output format
    pub log_format: Option<LogFormat>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
}

impl SettingsOverrides {
    /// Parses a settings layer from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self, SettingsError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| SettingsError::Parse {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Reads a settings layer from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let io_error = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > MAX_SETTINGS_FILE_SIZE {
            return Err(SettingsError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_SETTINGS_FILE_SIZE,
            });
        }

        let content = std::fs::read_to_string(path).map_err(io_error)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Reading settings files requires the `yaml` feature.
    #[cfg(not(feature = "yaml"))]
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        Err(SettingsError::Parse {
            message: format!(
                "Cannot read '{}': YAML support is disabled (enable the `yaml` feature)",
                path.display()
            ),
            source: None,
        })
    }
}

/// Returns the platform-specific default settings file location.
///
/// - Linux: `~/.config/config-registry/config.yaml`
/// - macOS: `~/Library/Application Support/org.config-registry.config-registry/config.yaml`
/// - Windows: `%APPDATA%\config-registry\config-registry\config\config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "config-registry", "config-registry")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
}

/// Command-line arguments of the registry server.
///
/// Every option can also be set through the environment variable named next to it.
#[cfg(feature = "cli")]
#[derive(Clone, Debug, Default, clap::Parser)]
#[command(name = "config-registry", version, about)]
pub struct Cli {
    /// Path to a YAML settings file
    #[arg(long, short = 'c', env = "CONFIG_REGISTRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host or IP address to bind
    #[arg(long, env = "CONFIG_REGISTRY_HOST")]
    pub host: Option<String>,

    /// TCP port to bind
    #[arg(long, short = 'p', env = "CONFIG_REGISTRY_PORT")]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, value_enum, env = "CONFIG_REGISTRY_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// `tracing` filter directive, e.g. `debug` or `info,config_registry=trace`
    #[arg(long, env = "CONFIG_REGISTRY_LOG_FILTER")]
    pub log_filter: Option<String>,
}

#[cfg(feature = "cli")]
impl Cli {
    /// Returns the settings layer given on the command line or in the environment.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            host: self.host.clone(),
            port: self.port,
            log_format: self.log_format,
            log_filter: self.log_filter.clone(),
        }
    }

    /// Resolves the final settings.
    pub fn load_settings(&self) -> Result<ServerSettings, SettingsError> {
        ServerSettings::load(self.config.as_deref(), &self.overrides())
    }
}
