//! Airtable REST API client.
//!
//! One method per remote operation. Each method builds a path, an optional
//! query string and an optional JSON body, then goes through [`AirtableClient::send`],
//! which attaches the bearer credential and normalizes the response.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use super::error::{ApiError, ApiResult};
use super::query::{self, with_query};
use super::types::{
    CreateBaseBody, CreateTableBody, CreateWebhookBody, FieldDefinition, JsonMap,
    ListRecordsOptions, MetadataUpdate, NewRecord, PerformUpsert, RecordUpdate, RecordsBody,
    TableDefinition, typecast_flag,
};

/// Public Airtable API root.
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";

// ============================================================================
// Request description
// ============================================================================

/// A single outbound call: method, path (with query) and optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Value>,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add an extra header. It is applied after the defaults, so it replaces
    /// `Authorization` or `Content-Type` when the names collide.
    pub fn header(mut self, name: HeaderName, value: &str) -> ApiResult<Self> {
        self.headers.insert(name, HeaderValue::from_str(value)?);
        Ok(self)
    }
}

// ============================================================================
// Connector (shared connection pool)
// ============================================================================

/// Credential-free handle on the HTTP connection pool.
///
/// Hands out [`AirtableClient`]s bound to one credential each; connecting is
/// cheap, so a client can be built for every tool call.
#[derive(Debug, Clone)]
pub struct AirtableConnector {
    http: reqwest::Client,
    base_url: String,
}

impl AirtableConnector {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("airtable-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bind a credential.
    pub fn connect(&self, token: impl Into<String>) -> AirtableClient {
        AirtableClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.into(),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Airtable client bound to a personal access token.
#[derive(Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// Custom Debug implementation to keep the token out of logs.
impl std::fmt::Debug for AirtableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

fn table_path(base_id: &str, table_id_or_name: &str) -> String {
    format!("/{}/{}", base_id, urlencoding::encode(table_id_or_name))
}

impl AirtableClient {
    /// Issue one request and return the parsed JSON body.
    ///
    /// Non-success statuses become [`ApiError::Status`] with the raw body.
    /// An empty success body yields `{}`.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("Airtable request");

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in request.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut builder = self.http.request(request.method, &url).headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        trace!(status = %status, bytes = text.len(), "Airtable response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Object(JsonMap::new()));
        }

        Ok(serde_json::from_str(&text)?)
    }

    // ========================================================================
    // Records
    // ========================================================================

    pub async fn list_records(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        options: &ListRecordsOptions,
    ) -> ApiResult<Value> {
        let query = query::list_records(options)?;
        let path = with_query(table_path(base_id, table_id_or_name), &query);
        self.send(ApiRequest::get(path)).await
    }

    pub async fn get_record(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        record_id: &str,
    ) -> ApiResult<Value> {
        let path = format!("{}/{}", table_path(base_id, table_id_or_name), record_id);
        self.send(ApiRequest::get(path)).await
    }

    pub async fn create_records(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        records: &[NewRecord],
        typecast: Option<bool>,
    ) -> ApiResult<Value> {
        let body = RecordsBody {
            perform_upsert: None,
            records,
            typecast: typecast_flag(typecast),
        };
        let request = ApiRequest::post(table_path(base_id, table_id_or_name)).json(&body)?;
        self.send(request).await
    }

    pub async fn update_records(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        records: &[RecordUpdate],
        typecast: Option<bool>,
    ) -> ApiResult<Value> {
        let body = RecordsBody {
            perform_upsert: None,
            records,
            typecast: typecast_flag(typecast),
        };
        let request = ApiRequest::patch(table_path(base_id, table_id_or_name)).json(&body)?;
        self.send(request).await
    }

    pub async fn delete_records(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        record_ids: &[String],
    ) -> ApiResult<Value> {
        let query = query::delete_records(record_ids);
        let path = with_query(table_path(base_id, table_id_or_name), &query);
        self.send(ApiRequest::delete(path)).await
    }

    /// Update-or-create, matched on `fields_to_merge_on` rather than record IDs.
    pub async fn upsert_records(
        &self,
        base_id: &str,
        table_id_or_name: &str,
        records: &[NewRecord],
        fields_to_merge_on: &[String],
        typecast: Option<bool>,
    ) -> ApiResult<Value> {
        let body = RecordsBody {
            perform_upsert: Some(PerformUpsert { fields_to_merge_on }),
            records,
            typecast: typecast_flag(typecast),
        };
        let request = ApiRequest::patch(table_path(base_id, table_id_or_name)).json(&body)?;
        self.send(request).await
    }

    // ========================================================================
    // Bases & schema
    // ========================================================================

    pub async fn list_bases(&self, offset: Option<&str>) -> ApiResult<Value> {
        let query = query::list_bases(offset)?;
        self.send(ApiRequest::get(with_query("/meta/bases".to_string(), &query)))
            .await
    }

    pub async fn get_base_schema(&self, base_id: &str) -> ApiResult<Value> {
        self.send(ApiRequest::get(format!("/meta/bases/{}/tables", base_id)))
            .await
    }

    pub async fn create_base(
        &self,
        name: &str,
        workspace_id: &str,
        tables: &[TableDefinition],
    ) -> ApiResult<Value> {
        let body = CreateBaseBody {
            name,
            workspace_id,
            tables,
        };
        self.send(ApiRequest::post("/meta/bases").json(&body)?).await
    }

    pub async fn create_table(
        &self,
        base_id: &str,
        name: &str,
        fields: &[FieldDefinition],
        description: Option<&str>,
    ) -> ApiResult<Value> {
        let body = CreateTableBody {
            name,
            fields,
            description: description.filter(|d| !d.is_empty()),
        };
        let request = ApiRequest::post(format!("/meta/bases/{}/tables", base_id)).json(&body)?;
        self.send(request).await
    }

    pub async fn update_table(
        &self,
        base_id: &str,
        table_id: &str,
        update: &MetadataUpdate,
    ) -> ApiResult<Value> {
        let path = format!("/meta/bases/{}/tables/{}", base_id, table_id);
        self.send(ApiRequest::patch(path).json(update)?).await
    }

    pub async fn create_field(
        &self,
        base_id: &str,
        table_id: &str,
        field: &FieldDefinition,
    ) -> ApiResult<Value> {
        let path = format!("/meta/bases/{}/tables/{}/fields", base_id, table_id);
        self.send(ApiRequest::post(path).json(field)?).await
    }

    pub async fn update_field(
        &self,
        base_id: &str,
        table_id: &str,
        field_id: &str,
        update: &MetadataUpdate,
    ) -> ApiResult<Value> {
        let path = format!(
            "/meta/bases/{}/tables/{}/fields/{}",
            base_id, table_id, field_id
        );
        self.send(ApiRequest::patch(path).json(update)?).await
    }

    // ========================================================================
    // Webhooks
    // ========================================================================

    /// The response carries `macSecretBase64`, which is only ever returned here.
    pub async fn create_webhook(
        &self,
        base_id: &str,
        notification_url: &str,
        specification: Option<&JsonMap>,
    ) -> ApiResult<Value> {
        let body = CreateWebhookBody {
            notification_url,
            specification,
        };
        let request = ApiRequest::post(format!("/bases/{}/webhooks", base_id)).json(&body)?;
        self.send(request).await
    }

    pub async fn list_webhooks(&self, base_id: &str) -> ApiResult<Value> {
        self.send(ApiRequest::get(format!("/bases/{}/webhooks", base_id)))
            .await
    }

    pub async fn refresh_webhook(&self, base_id: &str, webhook_id: &str) -> ApiResult<Value> {
        let path = format!("/bases/{}/webhooks/{}/refresh", base_id, webhook_id);
        self.send(ApiRequest::post(path)).await
    }

    pub async fn list_webhook_payloads(
        &self,
        base_id: &str,
        webhook_id: &str,
        cursor: Option<u64>,
        limit: Option<u32>,
    ) -> ApiResult<Value> {
        let query = query::webhook_payloads(cursor, limit)?;
        let path = format!("/bases/{}/webhooks/{}/payloads", base_id, webhook_id);
        self.send(ApiRequest::get(with_query(path, &query))).await
    }

    pub async fn delete_webhook(&self, base_id: &str, webhook_id: &str) -> ApiResult<Value> {
        let path = format!("/bases/{}/webhooks/{}", base_id, webhook_id);
        self.send(ApiRequest::delete(path)).await
    }
}
