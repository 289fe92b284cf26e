//! Error types and handling for the MCP server.
//!
//! Server construction errors. Tool-call failures never reach this type;
//! they end up in the result envelope. Prompt and resource lookups map
//! straight to protocol errors, and transports report `TransportError`.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Airtable client construction or request failure.
    #[error(transparent)]
    Api(#[from] crate::airtable::ApiError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
