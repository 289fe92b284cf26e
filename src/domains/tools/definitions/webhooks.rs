//! Webhook tools.
//!
//! Airtable expires webhooks 7 days after creation or the last refresh.
//! No expiry clock is kept here; callers refresh explicitly.

use schemars::JsonSchema;
use serde::Deserialize;

use super::schema::BaseParams;
use super::{AirtableTool, Hints};
use crate::airtable::JsonMap;
use crate::airtable::types::optional_count;
use crate::domains::tools::dispatch::AirtableOperation;
use crate::domains::tools::registry::ToolCategory;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWebhookParams {
    /// Airtable base ID
    pub base_id: String,

    /// HTTPS URL that receives change notifications
    pub notification_url: String,

    /// Webhook specification with filters (e.g., {"options": {"filters": {"dataTypes": ["tableData"], "recordChangeScope": "tblXXX"}}})
    #[serde(default)]
    pub specification: Option<JsonMap>,
}

/// Parameters addressing one webhook.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookParams {
    /// Airtable base ID
    pub base_id: String,

    /// Webhook ID (e.g., "achXXXXXXXXXXXXXX")
    pub webhook_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListWebhookPayloadsParams {
    /// Airtable base ID
    pub base_id: String,

    /// Webhook ID
    pub webhook_id: String,

    /// Cursor from the previous response; 0 is a valid position
    #[serde(default, deserialize_with = "optional_count")]
    pub cursor: Option<u64>,

    /// Number of payloads to return (1-100, default: 100)
    #[serde(default, deserialize_with = "optional_count")]
    pub limit: Option<u32>,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct CreateWebhookTool;

impl AirtableTool for CreateWebhookTool {
    const NAME: &'static str = "airtable_create_webhook";
    const TITLE: &'static str = "Create Webhook";
    const DESCRIPTION: &'static str = "Create a webhook that is notified when data in a base changes. Webhooks expire after 7 days; use airtable_refresh_webhook to extend them. The response contains the MAC secret used to verify payloads, and it is only returned once.";
    const CATEGORY: ToolCategory = ToolCategory::Webhooks;
    const HINTS: Hints = Hints {
        open_world: true,
        ..Hints::WRITE
    };
    type Params = CreateWebhookParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::CreateWebhook(params)
    }
}

pub struct ListWebhooksTool;

impl AirtableTool for ListWebhooksTool {
    const NAME: &'static str = "airtable_list_webhooks";
    const TITLE: &'static str = "List Webhooks";
    const DESCRIPTION: &'static str = "List the webhooks of a base with their IDs, enabled state, notification URLs and expiration times.";
    const CATEGORY: ToolCategory = ToolCategory::Webhooks;
    const HINTS: Hints = Hints::READ;
    type Params = BaseParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::ListWebhooks(params)
    }
}

pub struct RefreshWebhookTool;

impl AirtableTool for RefreshWebhookTool {
    const NAME: &'static str = "airtable_refresh_webhook";
    const TITLE: &'static str = "Refresh Webhook";
    const DESCRIPTION: &'static str = "Push a webhook's expiration to 7 days from now. Call it periodically to keep a webhook alive.";
    const CATEGORY: ToolCategory = ToolCategory::Webhooks;
    const HINTS: Hints = Hints::IDEMPOTENT_WRITE;
    type Params = WebhookParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::RefreshWebhook(params)
    }
}

pub struct ListWebhookPayloadsTool;

impl AirtableTool for ListWebhookPayloadsTool {
    const NAME: &'static str = "airtable_list_webhook_payloads";
    const TITLE: &'static str = "List Webhook Payloads";
    const DESCRIPTION: &'static str = "Get pending webhook payloads: the records, fields and tables changed since the given cursor. Pass the returned cursor back to continue while mightHaveMore is true.";
    const CATEGORY: ToolCategory = ToolCategory::Webhooks;
    const HINTS: Hints = Hints::READ;
    type Params = ListWebhookPayloadsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::ListWebhookPayloads(params)
    }
}

pub struct DeleteWebhookTool;

impl AirtableTool for DeleteWebhookTool {
    const NAME: &'static str = "airtable_delete_webhook";
    const TITLE: &'static str = "Delete Webhook";
    const DESCRIPTION: &'static str = "Delete a webhook. All of its notifications stop.";
    const CATEGORY: ToolCategory = ToolCategory::Webhooks;
    const HINTS: Hints = Hints::DESTRUCTIVE;
    type Params = WebhookParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::DeleteWebhook(params)
    }
}
