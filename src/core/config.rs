//! Configuration management for the MCP server.
//!
//! Defaults, overridden by environment variables (and a `.env` file when one
//! is present).

use super::transport::TransportConfig;
use crate::airtable::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Airtable API access.
    pub airtable: AirtableConfig,
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

/// Airtable API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AirtableConfig {
    /// Personal access token used for every call. When unset, each tool call
    /// must carry its own `AIRTABLE_PAT` argument.
    pub pat: Option<String>,

    /// API root, without trailing slash.
    pub api_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("pat", &self.pat.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            pat: None,
            api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "airtable-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            airtable: AirtableConfig::default(),
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
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); Airtable settings use
    /// `AIRTABLE_PAT` and `AIRTABLE_API_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.airtable.pat = std::env::var("AIRTABLE_PAT")
            .ok()
            .filter(|pat| !pat.is_empty());

        if let Ok(url) = std::env::var("AIRTABLE_API_URL") {
            config.airtable.api_url = url.trim_end_matches('/').to_string();
        }

        config
    }

    /// Log how the Airtable credential will be resolved.
    ///
    /// Separate from [`Config::from_env`] because configuration is read
    /// before the subscriber exists.
    pub fn log_credential_source(&self) {
        if self.airtable.pat.is_some() {
            info!("Airtable token loaded from environment");
        } else {
            warn!("AIRTABLE_PAT not set - every tool call must pass its own AIRTABLE_PAT argument");
        }
    }
}
