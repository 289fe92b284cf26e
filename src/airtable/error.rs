//! Error types for the Airtable API client.

use thiserror::Error;

/// A specialized Result type for Airtable client operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised while talking to the Airtable REST API.
///
/// Remote error bodies are kept verbatim; they are not reparsed or
/// classified by kind.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("Airtable API Error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-empty response body was not valid JSON, or a request body
    /// could not be encoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("Invalid query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The credential or a caller-supplied header is not a valid header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// HTTP status of the failed call, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code_and_body() {
        let err = ApiError::Status {
            status: 422,
            body: r#"{"error":{"type":"INVALID_REQUEST_UNKNOWN"}}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("INVALID_REQUEST_UNKNOWN"));
        assert_eq!(err.status(), Some(422));
    }
}
