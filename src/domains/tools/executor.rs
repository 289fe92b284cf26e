//! Tool executor - turns a tool call into a result envelope.
//!
//! Every call resolves its own credential and gets its own
//! [`AirtableClient`]; only the credential-free connection pool is shared.
//! Failures never cross the protocol boundary: they come back as an
//! `Error: ...` text block with `isError` set.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::dispatch::dispatch;
use super::error::ToolError;
use crate::airtable::{AirtableConnector, ApiResult};
use crate::core::config::AirtableConfig;

/// Argument key carrying a per-call personal access token.
pub const CREDENTIAL_ARGUMENT: &str = "AIRTABLE_PAT";

#[derive(Clone)]
pub struct ToolExecutor {
    connector: AirtableConnector,
    static_token: Option<String>,
}

impl std::fmt::Debug for ToolExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolExecutor")
            .field("base_url", &self.connector.base_url())
            .field("static_token", &self.static_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ToolExecutor {
    pub fn new(config: &AirtableConfig) -> ApiResult<Self> {
        Ok(Self {
            connector: AirtableConnector::new(config.api_url.clone())?,
            static_token: config.pat.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Whether a token is configured for the whole process.
    pub fn has_static_credential(&self) -> bool {
        self.static_token.is_some()
    }

    /// Static token first, then a non-empty `AIRTABLE_PAT` argument.
    fn resolve_credential(&self, arguments: &JsonObject) -> Option<String> {
        self.static_token.clone().or_else(|| {
            arguments
                .get(CREDENTIAL_ARGUMENT)
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
    }

    /// Run a tool call and wrap the outcome in a result envelope.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        info!("Tool called");
        match self.try_call(name, arguments).await {
            Ok(value) => {
                let text =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => {
                match &e {
                    ToolError::Api(api) => warn!(status = ?api.status(), "Airtable call failed"),
                    _ => warn!("Tool call rejected: {}", e),
                }
                CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
            }
        }
    }

    /// Credential check, then name lookup, then one API request.
    pub async fn try_call(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        let token = self
            .resolve_credential(&arguments)
            .ok_or(ToolError::MissingCredential)?;
        let operation = dispatch(name, arguments)?;
        let client = self.connector.connect(token);
        Ok(operation.execute(&client).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor(server: &MockServer, pat: Option<&str>) -> ToolExecutor {
        ToolExecutor::new(&AirtableConfig {
            pat: pat.map(str::to_string),
            api_url: server.uri(),
        })
        .unwrap()
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    fn text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = executor(&server, None)
            .call("airtable_list_bases", JsonObject::new())
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: AIRTABLE_PAT is required");
    }

    #[tokio::test]
    async fn test_empty_credential_argument_is_missing() {
        let server = MockServer::start().await;
        let result = executor(&server, None)
            .call("airtable_list_bases", args(json!({"AIRTABLE_PAT": ""})))
            .await;
        assert_eq!(text(&result), "Error: AIRTABLE_PAT is required");
    }

    #[tokio::test]
    async fn test_credential_checked_before_tool_name() {
        let server = MockServer::start().await;
        let result = executor(&server, None)
            .call("not_a_tool", JsonObject::new())
            .await;
        assert_eq!(text(&result), "Error: AIRTABLE_PAT is required");
    }

    #[tokio::test]
    async fn test_per_call_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meta/bases"))
            .and(header("authorization", "Bearer patCALL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bases": []})))
            .expect(1)
            .mount(&server)
            .await;

        let result = executor(&server, None)
            .call("airtable_list_bases", args(json!({"AIRTABLE_PAT": "patCALL"})))
            .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            serde_json::from_str::<Value>(&text(&result)).unwrap(),
            json!({"bases": []})
        );
    }

    #[tokio::test]
    async fn test_static_credential_preferred() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meta/bases/app1/tables"))
            .and(header("authorization", "Bearer patSTATIC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tables": []})))
            .expect(1)
            .mount(&server)
            .await;

        let result = executor(&server, Some("patSTATIC"))
            .call(
                "airtable_get_base_schema",
                args(json!({"base_id": "app1", "AIRTABLE_PAT": "patCALL"})),
            )
            .await;

        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_unknown_tool_envelope() {
        let server = MockServer::start().await;
        let result = executor(&server, Some("pat"))
            .call("airtable_drop_base", JsonObject::new())
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: Unknown tool: airtable_drop_base");
    }

    #[tokio::test]
    async fn test_api_status_in_envelope() {
        let server = MockServer::start().await;
        let body = r#"{"error":{"type":"NOT_FOUND"}}"#;
        Mock::given(method("GET"))
            .and(path("/app1/Tasks/recX"))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let result = executor(&server, Some("pat"))
            .call(
                "airtable_get_record",
                args(json!({"base_id": "app1", "table_id_or_name": "Tasks", "record_id": "recX"})),
            )
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text(&result),
            format!("Error: Airtable API Error (404): {}", body)
        );
    }

    #[tokio::test]
    async fn test_invalid_arguments_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = executor(&server, Some("pat"))
            .call("airtable_create_records", args(json!({"base_id": "app1"})))
            .await;

        assert_eq!(result.is_error, Some(true));
        assert!(
            text(&result).starts_with("Error: Invalid arguments for airtable_create_records:")
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let executor = ToolExecutor::new(&AirtableConfig {
            pat: Some("patSECRET".to_string()),
            api_url: "http://localhost".to_string(),
        })
        .unwrap();
        let debug = format!("{:?}", executor);
        assert!(!debug.contains("patSECRET"));
        assert!(debug.contains("[REDACTED]"));
    }
}
