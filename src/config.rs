//! Configuration module for filedrop.

use serde::Deserialize;
use std::path::Path;

use crate::{FileDropError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the uploaded blobs.
    #[serde(default = "default_files_dir")]
    pub files_dir: String,
    /// Path to the JSON snapshot of file records.
    #[serde(default = "default_database_file")]
    pub database_file: String,
    /// Public base URL prepended to access paths (e.g. behind a port
    /// mapping). When unset, access paths are server-relative.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

fn default_files_dir() -> String {
    "data/uploads".to_string()
}

fn default_database_file() -> String {
    "data/uploads/database.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            files_dir: default_files_dir(),
            database_file: default_database_file(),
            public_base_url: None,
        }
    }
}

/// Web UI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Whether to serve the client assets.
    #[serde(default = "default_serve_static")]
    pub serve_static: bool,
    /// Path to the client assets directory.
    #[serde(default = "default_static_path")]
    pub static_path: String,
}

fn default_serve_static() -> bool {
    true
}

fn default_static_path() -> String {
    "public".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            cors_origins: vec![],
            serve_static: default_serve_static(),
            static_path: default_static_path(),
        }
    }
}

/// Outbound webhook configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Webhook endpoint URL. The notify API is disabled when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Fixed preview string sent with every notification.
    #[serde(default = "default_preview")]
    pub preview: String,
}

fn default_preview() -> String {
    "你好".to_string()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            preview: default_preview(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/filedrop.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Web UI configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Outbound webhook configuration.
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FileDropError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FileDropError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FILEDROP_WEBHOOK_URL`: Override the webhook endpoint
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("FILEDROP_WEBHOOK_URL") {
            if !endpoint.is_empty() {
                self.webhook.endpoint = Some(endpoint);
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The listen host is empty
    /// - A webhook endpoint is set but is not a valid URL
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(FileDropError::Validation(
                "server.host must not be empty".to_string(),
            ));
        }

        if let Some(ref endpoint) = self.webhook.endpoint {
            url::Url::parse(endpoint).map_err(|e| {
                FileDropError::Validation(format!("webhook.endpoint is not a valid URL: {e}"))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8090);

        assert_eq!(config.storage.files_dir, "data/uploads");
        assert_eq!(config.storage.database_file, "data/uploads/database.json");
        assert!(config.storage.public_base_url.is_none());

        assert!(config.web.cors_origins.is_empty());
        assert!(config.web.serve_static);
        assert_eq!(config.web.static_path, "public");

        assert!(config.webhook.endpoint.is_none());
        assert_eq!(config.webhook.preview, "你好");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/filedrop.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8091

[storage]
files_dir = "custom/uploads"
database_file = "custom/uploads/db.json"
public_base_url = "http://files.example.com:8091"

[web]
cors_origins = ["http://localhost:3000"]
serve_static = false
static_path = "dist"

[webhook]
endpoint = "http://hooks.example.com/api/v1/webhook/abc"
preview = "hello"

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8091);

        assert_eq!(config.storage.files_dir, "custom/uploads");
        assert_eq!(config.storage.database_file, "custom/uploads/db.json");
        assert_eq!(
            config.storage.public_base_url.as_deref(),
            Some("http://files.example.com:8091")
        );

        assert_eq!(config.web.cors_origins.len(), 1);
        assert!(!config.web.serve_static);
        assert_eq!(config.web.static_path, "dist");

        assert_eq!(
            config.webhook.endpoint.as_deref(),
            Some("http://hooks.example.com/api/v1/webhook/abc")
        );
        assert_eq!(config.webhook.preview, "hello");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[server]
port = 3000
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.port, 3000);

        // Default values
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.files_dir, "data/uploads");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8090);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(FileDropError::Validation(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");

        assert!(result.is_err());
        assert!(matches!(result, Err(FileDropError::Io(_))));
    }

    #[test]
    fn test_apply_env_overrides_webhook_url() {
        let original = std::env::var("FILEDROP_WEBHOOK_URL").ok();

        std::env::set_var("FILEDROP_WEBHOOK_URL", "http://hooks.example.com/wh");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(
            config.webhook.endpoint.as_deref(),
            Some("http://hooks.example.com/wh")
        );

        if let Some(val) = original {
            std::env::set_var("FILEDROP_WEBHOOK_URL", val);
        } else {
            std::env::remove_var("FILEDROP_WEBHOOK_URL");
        }
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_webhook_url() {
        let mut config = Config::default();
        config.webhook.endpoint = Some("not a url".to_string());

        let result = config.validate();
        assert!(result.is_err());
        if let Err(FileDropError::Validation(msg)) = result {
            assert!(msg.contains("webhook.endpoint"));
        }
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(Config::default().validate().is_ok());
    }
}
