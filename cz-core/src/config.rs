//! Client configuration management.
//!
//! Handles loading, saving, and accessing the client configuration: service
//! address, API token, request timeout, and logging preferences. The
//! configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{CzError, CzResult};
use crate::platform;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// API client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service base address, without the `/api/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token. Empty means only public endpoints are usable.
    #[serde(default)]
    pub api_token: String,

    /// Request timeout in milliseconds, applied to the whole transfer.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: String::new(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ClientConfig {
    /// Configuration for the production service with the given token.
    pub fn with_token(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Whether an API token is configured. The token is used verbatim.
    pub fn has_credential(&self) -> bool {
        !self.api_token.is_empty()
    }

    /// The request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Normalize a base address: strip whitespace, stray quotes and
    /// trailing slashes.
    pub fn sanitize_base_url(address: &str) -> String {
        address
            .trim()
            .trim_matches('"')
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> CzResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> CzResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> CzResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CzError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> CzResult<PathBuf> {
        let config_dir = platform::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> CzResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let data_dir = platform::data_dir()?;
            Ok(data_dir.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Fill in the API token from `CONTENTZEN_API_TOKEN` when the file left it empty.
    pub fn apply_env(&mut self) {
        self.apply_token_fallback(std::env::var(constants::API_TOKEN_ENV).ok());
    }

    /// Use `token` only if no token is configured yet.
    pub fn apply_token_fallback(&mut self, token: Option<String>) {
        if self.client.has_credential() {
            return;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.client.api_token = token;
        }
    }
}
