//! Tool-specific error types.

use thiserror::Error;

use crate::airtable::ApiError;

/// Errors that can occur while resolving or running a tool call.
///
/// The display string is what lands after `Error: ` in the result envelope.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not one of the registered tools.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The argument bag could not be shaped into the tool's parameters.
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// Neither static configuration nor the call supplied a token.
    #[error("AIRTABLE_PAT is required")]
    MissingCredential,

    /// The Airtable API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
