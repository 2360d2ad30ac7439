//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dataset is loaded from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// Local file to read instead of fetching `url`
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_url() -> String {
    "http://localhost:8080/sideData.json".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("ledgerview").join("config.toml")),
            Some(PathBuf::from("./ledgerview.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("LEDGERVIEW_SOURCE_URL") {
            self.source.url = url;
        }
        if let Some(path) = lookup("LEDGERVIEW_SOURCE_PATH") {
            self.source.path = Some(path);
        }
        if let Some(timeout) = lookup("LEDGERVIEW_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.source.request_timeout_secs = secs;
            }
        }
        if let Some(level) = lookup("LEDGERVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LEDGERVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Ledgerview Configuration
#
# Environment variables override these settings:
# - LEDGERVIEW_SOURCE_URL
# - LEDGERVIEW_SOURCE_PATH
# - LEDGERVIEW_REQUEST_TIMEOUT_SECS
# - LEDGERVIEW_LOG_LEVEL
# - LEDGERVIEW_LOG_FORMAT

[source]
# URL of the dataset document
url = "http://localhost:8080/sideData.json"

# Read a local file instead of fetching the URL
# path = "data/sideData.json"

# Request timeout in seconds
request_timeout_secs = 10

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.url, "http://localhost:8080/sideData.json");
        assert!(config.source.path.is_none());
        assert_eq!(config.source.request_timeout_secs, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.source.url, SourceConfig::default().url);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [source]
            path = "data/sideData.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.source.path.as_deref(), Some("data/sideData.json"));
        assert_eq!(config.source.request_timeout_secs, 10);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LEDGERVIEW_SOURCE_URL", "http://example.test/data.json"),
            ("LEDGERVIEW_REQUEST_TIMEOUT_SECS", "not-a-number"),
            ("LEDGERVIEW_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.url, "http://example.test/data.json");
        assert_eq!(config.source.request_timeout_secs, 10);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let path = dir.path().join("bad.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"[source\nurl = 1").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
