//! Application configuration management.
//!
//! Handles loading, saving, and accessing configuration: the Pushbullet
//! access token, API base URL, request timeout, and logging settings.
//! Configuration is persisted as TOML on disk.
//!
//! The credential is read once at load time and handed to the client
//! explicitly; nothing in this workspace reads ambient global state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{PbError, PbResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pushbullet API settings.
    #[serde(default)]
    pub pushbullet: PushbulletConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pushbullet API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushbulletConfig {
    /// Opaque access token authorizing all API calls.
    #[serde(default)]
    pub access_token: String,

    /// Base URL of the API host (no trailing slash, no version suffix).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, file logging is disabled.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_api_base() -> String {
    constants::API_BASE_URL.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pushbullet: PushbulletConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PushbulletConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            api_base: default_api_base(),
            api_timeout_ms: default_api_timeout(),
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

impl PushbulletConfig {
    /// Create a configuration from a bare access token, with defaults for
    /// everything else.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Whether an access token is present.
    pub fn is_configured(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> PbResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> PbResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> PbResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PbError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path
    /// (`<platform config dir>/pushbullet/config.toml`).
    pub fn default_config_path() -> PbResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| PbError::Config("could not determine config directory".into()))?;
        Ok(base.join(constants::APP_NAME).join("config.toml"))
    }
}
