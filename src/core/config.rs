//! Application configuration management
//!
//! This module handles loading configuration from an optional TOML file,
//! with the API key overridable through the environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "HANDINGER_API_KEY";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.handinger.com";

/// Default configuration file path
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolved application configuration
///
/// Loaded once at startup; a missing or empty API key is rejected before any
/// request is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    /// Handinger API key
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Self::resolve(config, std::env::var(API_KEY_ENV).ok()))
    }

    /// Load configuration for the current process
    ///
    /// Uses `path` when given; otherwise falls back to `CONFIG_PATH` or
    /// `config.toml`. The file is optional unless a path was given
    /// explicitly: without one, defaults plus the environment key apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let fallback =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if Path::new(&fallback).exists() {
            Self::from_file(&fallback)
        } else {
            Ok(Self::resolve(
                TomlConfig::default(),
                std::env::var(API_KEY_ENV).ok(),
            ))
        }
    }

    /// Merge file values with the environment override
    fn resolve(config: TomlConfig, env_key: Option<String>) -> Self {
        let api_key = env_key
            .filter(|key| !key.trim().is_empty())
            .or(config.api.key)
            .unwrap_or_default();

        Config {
            api_key,
            base_url: config
                .api
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            log_level: config.log_level,
        }
    }

    /// Check that an API key is present
    ///
    /// No format validation is done locally; an invalid key surfaces as an
    /// authentication failure from the remote API.
    pub fn validate_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            log_level = "debug"

            [api]
            key = "hk-test123"
            base_url = "https://scraper.internal.example"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_resolve_from_file_values() {
        let file = create_test_config();
        let content = fs::read_to_string(file.path()).unwrap();
        let toml_config: TomlConfig = toml::from_str(&content).unwrap();

        let config = Config::resolve(toml_config, None);
        assert_eq!(config.api_key, "hk-test123");
        assert_eq!(config.base_url, "https://scraper.internal.example");
        assert_eq!(config.log_level, "debug");
        assert!(config.validate_api_key());
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let toml_config = TomlConfig {
            api: ApiConfig {
                key: Some("hk-from-file".to_string()),
                base_url: None,
            },
            log_level: default_log_level(),
        };

        let config = Config::resolve(toml_config, Some("hk-from-env".to_string()));
        assert_eq!(config.api_key, "hk-from-env");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_blank_env_key_ignored() {
        let toml_config = TomlConfig {
            api: ApiConfig {
                key: Some("hk-from-file".to_string()),
                base_url: None,
            },
            log_level: default_log_level(),
        };

        let config = Config::resolve(toml_config, Some("  ".to_string()));
        assert_eq!(config.api_key, "hk-from-file");
    }

    #[test]
    fn test_defaults_without_file_values() {
        let config = Config::resolve(TomlConfig::default(), None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert!(!config.validate_api_key());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_file("/nonexistent/handinger.toml");
        assert!(result.is_err());
    }
}
