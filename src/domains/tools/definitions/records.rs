//! Record tools: list, get, create, update, delete and upsert.
//!
//! Batch tools forward whatever the caller sends; Airtable caps batches at
//! 10 records per request and reports its own per-record outcome.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{AirtableTool, Hints};
use crate::airtable::{ListRecordsOptions, NewRecord, RecordUpdate};
use crate::domains::tools::dispatch::AirtableOperation;
use crate::domains::tools::registry::ToolCategory;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListRecordsParams {
    /// Airtable base ID (e.g., "appXXXXXXXXXXXXXX")
    pub base_id: String,

    /// Table ID (e.g., "tblXXX") or table name (e.g., "Tasks")
    pub table_id_or_name: String,

    #[serde(flatten)]
    pub options: ListRecordsOptions,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRecordParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID or name
    pub table_id_or_name: String,

    /// Record ID (e.g., "recXXXXXXXXXXXXXX")
    pub record_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateRecordsParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID or name
    pub table_id_or_name: String,

    /// Records to create (max 10). Each: {"fields": {"Name": "value", "Status": "Open"}}
    pub records: Vec<NewRecord>,

    /// Auto-convert field values to the correct type (default: false)
    #[serde(default)]
    pub typecast: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateRecordsParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID or name
    pub table_id_or_name: String,

    /// Records to update (max 10). Each: {"id": "recXXX", "fields": {"Status": "Done"}}
    pub records: Vec<RecordUpdate>,

    /// Auto-convert field values to the correct type (default: false)
    #[serde(default)]
    pub typecast: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteRecordsParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID or name
    pub table_id_or_name: String,

    /// IDs of the records to delete (max 10)
    pub record_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpsertRecordsParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID or name
    pub table_id_or_name: String,

    /// Records to upsert. Each: {"fields": {"Email": "user@example.com", "Name": "John"}}
    pub records: Vec<NewRecord>,

    /// Field names used to match existing records (e.g., ["Email"])
    pub fields_to_merge_on: Vec<String>,

    /// Auto-convert field values to the correct type (default: false)
    #[serde(default)]
    pub typecast: Option<bool>,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct ListRecordsTool;

impl AirtableTool for ListRecordsTool {
    const NAME: &'static str = "airtable_list_records";
    const TITLE: &'static str = "List Records";
    const DESCRIPTION: &'static str = "List records from an Airtable table. Supports filtering with formulas, sorting, field selection, views, and pagination (max 100 per page). Pass the offset token from the response to fetch the next page.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::READ;
    type Params = ListRecordsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::ListRecords(params)
    }
}

pub struct GetRecordTool;

impl AirtableTool for GetRecordTool {
    const NAME: &'static str = "airtable_get_record";
    const TITLE: &'static str = "Get Record";
    const DESCRIPTION: &'static str =
        "Get a single record by its ID. Returns the record with all of its fields.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::READ;
    type Params = GetRecordParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::GetRecord(params)
    }
}

pub struct CreateRecordsTool;

impl AirtableTool for CreateRecordsTool {
    const NAME: &'static str = "airtable_create_records";
    const TITLE: &'static str = "Create Records";
    const DESCRIPTION: &'static str = "Create one or more records in a table (max 10 per request). Each record needs a \"fields\" object of field name/value pairs. Enable typecast to let Airtable convert values to the field types.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::WRITE;
    type Params = CreateRecordsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::CreateRecords(params)
    }
}

pub struct UpdateRecordsTool;

impl AirtableTool for UpdateRecordsTool {
    const NAME: &'static str = "airtable_update_records";
    const TITLE: &'static str = "Update Records";
    const DESCRIPTION: &'static str = "Update fields of one or more records (partial update, max 10 per request). Only the given fields change; all other fields are left untouched.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::WRITE;
    type Params = UpdateRecordsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::UpdateRecords(params)
    }
}

pub struct DeleteRecordsTool;

impl AirtableTool for DeleteRecordsTool {
    const NAME: &'static str = "airtable_delete_records";
    const TITLE: &'static str = "Delete Records";
    const DESCRIPTION: &'static str =
        "Delete one or more records by ID (max 10 per request). This cannot be undone.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::DESTRUCTIVE;
    type Params = DeleteRecordsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::DeleteRecords(params)
    }
}

pub struct UpsertRecordsTool;

impl AirtableTool for UpsertRecordsTool {
    const NAME: &'static str = "airtable_upsert_records";
    const TITLE: &'static str = "Upsert Records";
    const DESCRIPTION: &'static str = "Update existing records or create new ones, matched on fields_to_merge_on instead of record IDs. Matched records are updated, unmatched ones are created.";
    const CATEGORY: ToolCategory = ToolCategory::Records;
    const HINTS: Hints = Hints::WRITE;
    type Params = UpsertRecordsParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::UpsertRecords(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_params_flatten_options() {
        let params: ListRecordsParams = serde_json::from_value(json!({
            "base_id": "app1",
            "table_id_or_name": "Tasks",
            "page_size": 20,
            "sort": [{"field": "Name"}],
            "return_fields_by_field_id": true
        }))
        .unwrap();

        assert_eq!(params.options.page_size, Some(20));
        assert_eq!(params.options.sort.unwrap()[0].field, "Name");
        assert_eq!(params.options.return_fields_by_field_id, Some(true));
        assert!(params.options.view.is_none());
    }

    #[test]
    fn test_update_records_require_ids() {
        let result: Result<UpdateRecordsParams, _> = serde_json::from_value(json!({
            "base_id": "app1",
            "table_id_or_name": "Tasks",
            "records": [{"fields": {"Status": "Done"}}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_upsert_requires_merge_fields() {
        let result: Result<UpsertRecordsParams, _> = serde_json::from_value(json!({
            "base_id": "app1",
            "table_id_or_name": "Tasks",
            "records": [{"fields": {"Email": "a@example.com"}}]
        }));
        assert!(result.is_err());
    }
}
