//! Tool name to typed operation.
//!
//! [`dispatch`] is the only place a wire tool name is looked up. Everything
//! after it works on [`AirtableOperation`], so a tool can never reach the
//! client with a half-shaped argument bag.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::definitions::records::{
    CreateRecordsParams, DeleteRecordsParams, GetRecordParams, ListRecordsParams,
    UpdateRecordsParams, UpsertRecordsParams,
};
use super::definitions::schema::{
    BaseParams, CreateBaseParams, CreateFieldParams, CreateTableParams, ListBasesParams,
    UpdateFieldParams, UpdateTableParams,
};
use super::definitions::webhooks::{
    CreateWebhookParams, ListWebhookPayloadsParams, WebhookParams,
};
use super::definitions::*;
use super::error::ToolError;
use crate::airtable::{AirtableClient, ApiResult, MetadataUpdate};

/// One fully-parsed tool call.
#[derive(Debug, Clone)]
pub enum AirtableOperation {
    ListRecords(ListRecordsParams),
    GetRecord(GetRecordParams),
    CreateRecords(CreateRecordsParams),
    UpdateRecords(UpdateRecordsParams),
    DeleteRecords(DeleteRecordsParams),
    UpsertRecords(UpsertRecordsParams),
    ListBases(ListBasesParams),
    GetBaseSchema(BaseParams),
    CreateBase(CreateBaseParams),
    CreateTable(CreateTableParams),
    UpdateTable(UpdateTableParams),
    CreateField(CreateFieldParams),
    UpdateField(UpdateFieldParams),
    CreateWebhook(CreateWebhookParams),
    ListWebhooks(BaseParams),
    RefreshWebhook(WebhookParams),
    ListWebhookPayloads(ListWebhookPayloadsParams),
    DeleteWebhook(WebhookParams),
}

/// Resolve a tool name and its argument bag into an operation.
pub fn dispatch(name: &str, arguments: JsonObject) -> Result<AirtableOperation, ToolError> {
    match name {
        ListRecordsTool::NAME => ListRecordsTool::parse(arguments),
        GetRecordTool::NAME => GetRecordTool::parse(arguments),
        CreateRecordsTool::NAME => CreateRecordsTool::parse(arguments),
        UpdateRecordsTool::NAME => UpdateRecordsTool::parse(arguments),
        DeleteRecordsTool::NAME => DeleteRecordsTool::parse(arguments),
        UpsertRecordsTool::NAME => UpsertRecordsTool::parse(arguments),
        ListBasesTool::NAME => ListBasesTool::parse(arguments),
        GetBaseSchemaTool::NAME => GetBaseSchemaTool::parse(arguments),
        CreateBaseTool::NAME => CreateBaseTool::parse(arguments),
        CreateTableTool::NAME => CreateTableTool::parse(arguments),
        UpdateTableTool::NAME => UpdateTableTool::parse(arguments),
        CreateFieldTool::NAME => CreateFieldTool::parse(arguments),
        UpdateFieldTool::NAME => UpdateFieldTool::parse(arguments),
        CreateWebhookTool::NAME => CreateWebhookTool::parse(arguments),
        ListWebhooksTool::NAME => ListWebhooksTool::parse(arguments),
        RefreshWebhookTool::NAME => RefreshWebhookTool::parse(arguments),
        ListWebhookPayloadsTool::NAME => ListWebhookPayloadsTool::parse(arguments),
        DeleteWebhookTool::NAME => DeleteWebhookTool::parse(arguments),
        _ => Err(ToolError::unknown_tool(name)),
    }
}

impl AirtableOperation {
    /// Wire name of the tool this operation came from.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::ListRecords(_) => ListRecordsTool::NAME,
            Self::GetRecord(_) => GetRecordTool::NAME,
            Self::CreateRecords(_) => CreateRecordsTool::NAME,
            Self::UpdateRecords(_) => UpdateRecordsTool::NAME,
            Self::DeleteRecords(_) => DeleteRecordsTool::NAME,
            Self::UpsertRecords(_) => UpsertRecordsTool::NAME,
            Self::ListBases(_) => ListBasesTool::NAME,
            Self::GetBaseSchema(_) => GetBaseSchemaTool::NAME,
            Self::CreateBase(_) => CreateBaseTool::NAME,
            Self::CreateTable(_) => CreateTableTool::NAME,
            Self::UpdateTable(_) => UpdateTableTool::NAME,
            Self::CreateField(_) => CreateFieldTool::NAME,
            Self::UpdateField(_) => UpdateFieldTool::NAME,
            Self::CreateWebhook(_) => CreateWebhookTool::NAME,
            Self::ListWebhooks(_) => ListWebhooksTool::NAME,
            Self::RefreshWebhook(_) => RefreshWebhookTool::NAME,
            Self::ListWebhookPayloads(_) => ListWebhookPayloadsTool::NAME,
            Self::DeleteWebhook(_) => DeleteWebhookTool::NAME,
        }
    }

    /// Run the operation: exactly one API request.
    pub async fn execute(&self, client: &AirtableClient) -> ApiResult<Value> {
        match self {
            Self::ListRecords(p) => {
                client
                    .list_records(&p.base_id, &p.table_id_or_name, &p.options)
                    .await
            }
            Self::GetRecord(p) => {
                client
                    .get_record(&p.base_id, &p.table_id_or_name, &p.record_id)
                    .await
            }
            Self::CreateRecords(p) => {
                client
                    .create_records(&p.base_id, &p.table_id_or_name, &p.records, p.typecast)
                    .await
            }
            Self::UpdateRecords(p) => {
                client
                    .update_records(&p.base_id, &p.table_id_or_name, &p.records, p.typecast)
                    .await
            }
            Self::DeleteRecords(p) => {
                client
                    .delete_records(&p.base_id, &p.table_id_or_name, &p.record_ids)
                    .await
            }
            Self::UpsertRecords(p) => {
                client
                    .upsert_records(
                        &p.base_id,
                        &p.table_id_or_name,
                        &p.records,
                        &p.fields_to_merge_on,
                        p.typecast,
                    )
                    .await
            }
            Self::ListBases(p) => client.list_bases(p.offset.as_deref()).await,
            Self::GetBaseSchema(p) => client.get_base_schema(&p.base_id).await,
            Self::CreateBase(p) => {
                client
                    .create_base(&p.name, &p.workspace_id, &p.tables)
                    .await
            }
            Self::CreateTable(p) => {
                client
                    .create_table(&p.base_id, &p.name, &p.fields, p.description.as_deref())
                    .await
            }
            Self::UpdateTable(p) => {
                client
                    .update_table(&p.base_id, &p.table_id, &MetadataUpdate::from(p))
                    .await
            }
            Self::CreateField(p) => {
                client
                    .create_field(&p.base_id, &p.table_id, &p.definition())
                    .await
            }
            Self::UpdateField(p) => {
                client
                    .update_field(
                        &p.base_id,
                        &p.table_id,
                        &p.field_id,
                        &MetadataUpdate::from(p),
                    )
                    .await
            }
            Self::CreateWebhook(p) => {
                client
                    .create_webhook(&p.base_id, &p.notification_url, p.specification.as_ref())
                    .await
            }
            Self::ListWebhooks(p) => client.list_webhooks(&p.base_id).await,
            Self::RefreshWebhook(p) => client.refresh_webhook(&p.base_id, &p.webhook_id).await,
            Self::ListWebhookPayloads(p) => {
                client
                    .list_webhook_payloads(&p.base_id, &p.webhook_id, p.cursor, p.limit)
                    .await
            }
            Self::DeleteWebhook(p) => client.delete_webhook(&p.base_id, &p.webhook_id).await,
        }
    }
}
