//! # Server Configuration
//!
//! Settings for the HTTP server, layered lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config filmorate.toml`)
//! 3. Environment variables
//! 4. Command-line flags
//!
//! ## Environment Variables
//!
//! - `FILMORATE_HOST`: bind address
//! - `FILMORATE_PORT`: bind port
//! - `FILMORATE_RATE_LIMIT`: requests per second (0 disables)
//! - `FILMORATE_CORS_ORIGINS`: comma-separated origins, or "*" for all
//! - `FILMORATE_LOG_FORMAT`: "text" or "json"
//!
//! ## Example File
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 9000
//! rate_limit = 0
//! cors_origins = "https://films.example.com"
//! log_format = "json"
//! ```

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum accepted size of a configuration file (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "unknown log format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

/// Effective server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
    /// `None` allows localhost only; `Some("*")` allows everything.
    pub cors_origins: Option<String>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: 100,
            cors_origins: None,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config(format!(
                "config file is {} bytes, maximum is {}",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Apply `FILMORATE_*` overrides from a variable lookup.
    ///
    /// Empty values are ignored. Takes the lookup as a function so tests do
    /// not have to touch the real environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("FILMORATE_HOST") {
            self.host = host;
        }
        if let Some(port) = get("FILMORATE_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("invalid FILMORATE_PORT '{}'", port)))?;
        }
        if let Some(limit) = get("FILMORATE_RATE_LIMIT") {
            self.rate_limit = limit.trim().parse().map_err(|_| {
                AppError::Config(format!("invalid FILMORATE_RATE_LIMIT '{}'", limit))
            })?;
        }
        if let Some(origins) = get("FILMORATE_CORS_ORIGINS") {
            self.cors_origins = Some(origins);
        }
        if let Some(format) = get("FILMORATE_LOG_FORMAT") {
            self.log_format = LogFormat::parse(&format)?;
        }
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// `host:port` for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
