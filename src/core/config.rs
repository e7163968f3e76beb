//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default outbound request timeout in seconds.
///
/// The upstream API has no long-running endpoints, so a flat request
/// timeout is enough; "wait indefinitely" is never the right answer.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Homebox API connection configuration.
    pub homebox: HomeboxConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the upstream Homebox instance.
///
/// `base_url` and `token` are optional here because their absence is not a
/// startup error: the server starts regardless, and every tool invocation
/// resolves them and fails closed with a `MissingCredentials` error when
/// either is unset or empty.
#[derive(Clone, Serialize, Deserialize)]
pub struct HomeboxConfig {
    /// Base URL of the Homebox instance (e.g., "https://homebox.example.com").
    pub base_url: Option<String>,

    /// Bearer token used to authenticate against the Homebox API.
    pub token: Option<String>,

    /// Timeout applied to every outbound request, in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the bearer token from logs.
impl std::fmt::Debug for HomeboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeboxConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for HomeboxConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "homebox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            homebox: HomeboxConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server-level settings are prefixed with `MCP_` (e.g., `MCP_LOG_LEVEL`,
    /// `MCP_TRANSPORT`). The Homebox connection uses the conventional
    /// `HOMEBOX_URL` and `HOMEBOX_TOKEN` variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load Homebox connection settings
        if let Ok(url) = std::env::var("HOMEBOX_URL") {
            config.homebox.base_url = Some(url);
            info!("Homebox URL loaded from environment");
        } else {
            warn!("HOMEBOX_URL not set - every tool call will fail until it is configured");
        }

        if let Ok(token) = std::env::var("HOMEBOX_TOKEN") {
            config.homebox.token = Some(token);
        } else {
            warn!("HOMEBOX_TOKEN not set - every tool call will fail until it is configured");
        }

        if let Ok(timeout) = std::env::var("HOMEBOX_TIMEOUT_SECS") {
            config.homebox.timeout_secs = timeout.parse().unwrap_or(DEFAULT_TIMEOUT_SECS);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_homebox_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("HOMEBOX_URL", "http://homebox.local:7745");
            std::env::set_var("HOMEBOX_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.homebox.base_url.as_deref(),
            Some("http://homebox.local:7745")
        );
        assert_eq!(config.homebox.token.as_deref(), Some("test_token_12345"));
        unsafe {
            std::env::remove_var("HOMEBOX_URL");
            std::env::remove_var("HOMEBOX_TOKEN");
        }
    }

    #[test]
    fn test_homebox_defaults_when_unset() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HOMEBOX_URL");
            std::env::remove_var("HOMEBOX_TOKEN");
            std::env::remove_var("HOMEBOX_TIMEOUT_SECS");
        }
        let config = Config::from_env();
        assert!(config.homebox.base_url.is_none());
        assert!(config.homebox.token.is_none());
        assert_eq!(config.homebox.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("HOMEBOX_URL");
            std::env::remove_var("HOMEBOX_TOKEN");
            std::env::set_var("HOMEBOX_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.homebox.timeout_secs, 5);
        unsafe {
            std::env::remove_var("HOMEBOX_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let homebox = HomeboxConfig {
            base_url: Some("http://homebox.local".to_string()),
            token: Some("super_secret_token".to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        let debug_str = format!("{:?}", homebox);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
