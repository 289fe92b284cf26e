//! Base and schema tools: list bases, read a schema, create bases, tables and
//! fields, and rename or re-describe tables and fields.
//!
//! Nothing here deletes schema objects; the Airtable API does not offer it.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{AirtableTool, Hints};
use crate::airtable::{FieldDefinition, JsonMap, MetadataUpdate, TableDefinition};
use crate::domains::tools::dispatch::AirtableOperation;
use crate::domains::tools::registry::ToolCategory;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListBasesParams {
    /// Pagination token from previous response
    #[serde(default)]
    pub offset: Option<String>,
}

/// Parameters addressing a whole base.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BaseParams {
    /// Airtable base ID (e.g., "appXXXXXXXXXXXXXX")
    pub base_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBaseParams {
    /// Name for the new base
    pub name: String,

    /// Workspace ID (e.g., "wspXXXXXXXXXXXXXX")
    pub workspace_id: String,

    /// Table definitions. Each: {"name": "Tasks", "fields": [{"name": "Name", "type": "singleLineText"}]}
    pub tables: Vec<TableDefinition>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTableParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table name
    pub name: String,

    /// Field definitions. Each: {"name": "Status", "type": "singleSelect", "options": {"choices": [{"name": "Open"}]}}
    pub fields: Vec<FieldDefinition>,

    /// Table description
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTableParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID (e.g., "tblXXXXXXXXXXXXXX")
    pub table_id: String,

    /// New table name
    #[serde(default)]
    pub name: Option<String>,

    /// New table description
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFieldParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID
    pub table_id: String,

    /// Field name
    pub name: String,

    /// Field type (e.g., "singleLineText", "number", "singleSelect")
    #[serde(rename = "type")]
    pub field_type: String,

    /// Field options (e.g., for singleSelect: {"choices": [{"name": "High", "color": "redBright"}]})
    #[serde(default)]
    pub options: Option<JsonMap>,

    /// Field description
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateFieldParams {
    pub fn definition(&self) -> FieldDefinition {
        FieldDefinition {
            name: self.name.clone(),
            field_type: self.field_type.clone(),
            options: self.options.clone(),
            description: self.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateFieldParams {
    /// Airtable base ID
    pub base_id: String,

    /// Table ID
    pub table_id: String,

    /// Field ID (e.g., "fldXXXXXXXXXXXXXX")
    pub field_id: String,

    /// New field name
    #[serde(default)]
    pub name: Option<String>,

    /// New field description
    #[serde(default)]
    pub description: Option<String>,
}

impl From<&UpdateTableParams> for MetadataUpdate {
    fn from(params: &UpdateTableParams) -> Self {
        Self {
            name: params.name.clone(),
            description: params.description.clone(),
        }
    }
}

impl From<&UpdateFieldParams> for MetadataUpdate {
    fn from(params: &UpdateFieldParams) -> Self {
        Self {
            name: params.name.clone(),
            description: params.description.clone(),
        }
    }
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct ListBasesTool;

impl AirtableTool for ListBasesTool {
    const NAME: &'static str = "airtable_list_bases";
    const TITLE: &'static str = "List Bases";
    const DESCRIPTION: &'static str = "List all bases the token can access, with base ID, name and permission level.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::READ;
    type Params = ListBasesParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::ListBases(params)
    }
}

pub struct GetBaseSchemaTool;

impl AirtableTool for GetBaseSchemaTool {
    const NAME: &'static str = "airtable_get_base_schema";
    const TITLE: &'static str = "Get Base Schema";
    const DESCRIPTION: &'static str = "Get the complete schema of a base: every table with its fields (name, type, options) and views. Read this before querying an unfamiliar base.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::READ;
    type Params = BaseParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::GetBaseSchema(params)
    }
}

pub struct CreateBaseTool;

impl AirtableTool for CreateBaseTool {
    const NAME: &'static str = "airtable_create_base";
    const TITLE: &'static str = "Create Base";
    const DESCRIPTION: &'static str = "Create a new base in a workspace. Requires at least one table with at least one field.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::WRITE;
    type Params = CreateBaseParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::CreateBase(params)
    }
}

pub struct CreateTableTool;

impl AirtableTool for CreateTableTool {
    const NAME: &'static str = "airtable_create_table";
    const TITLE: &'static str = "Create Table";
    const DESCRIPTION: &'static str = "Create a new table in a base. Requires at least one field. Field types include singleLineText, multilineText, number, singleSelect, multipleSelects, date, checkbox, email and url.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::WRITE;
    type Params = CreateTableParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::CreateTable(params)
    }
}

pub struct UpdateTableTool;

impl AirtableTool for UpdateTableTool {
    const NAME: &'static str = "airtable_update_table";
    const TITLE: &'static str = "Update Table";
    const DESCRIPTION: &'static str = "Change the name or description of a table.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::IDEMPOTENT_WRITE;
    type Params = UpdateTableParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::UpdateTable(params)
    }
}

pub struct CreateFieldTool;

impl AirtableTool for CreateFieldTool {
    const NAME: &'static str = "airtable_create_field";
    const TITLE: &'static str = "Create Field";
    const DESCRIPTION: &'static str = "Add a new field to a table. Common types: singleLineText, multilineText, number, singleSelect, multipleSelects, date, dateTime, checkbox, email, url, multipleAttachments, multipleRecordLinks.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::WRITE;
    type Params = CreateFieldParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::CreateField(params)
    }
}

pub struct UpdateFieldTool;

impl AirtableTool for UpdateFieldTool {
    const NAME: &'static str = "airtable_update_field";
    const TITLE: &'static str = "Update Field";
    const DESCRIPTION: &'static str =
        "Change the name or description of a field. The field type cannot be changed.";
    const CATEGORY: ToolCategory = ToolCategory::Schema;
    const HINTS: Hints = Hints::IDEMPOTENT_WRITE;
    type Params = UpdateFieldParams;

    fn operation(params: Self::Params) -> AirtableOperation {
        AirtableOperation::UpdateField(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_bases_accepts_empty_bag() {
        let params: ListBasesParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.offset.is_none());
    }

    #[test]
    fn test_create_field_definition() {
        let params: CreateFieldParams = serde_json::from_value(json!({
            "base_id": "app1",
            "table_id": "tbl1",
            "name": "Priority",
            "type": "singleSelect",
            "options": {"choices": [{"name": "High"}]},
            "description": ""
        }))
        .unwrap();

        let definition = params.definition();
        assert_eq!(definition.field_type, "singleSelect");
        assert!(definition.options.is_some());
        assert!(definition.description.is_none());
    }

    #[test]
    fn test_create_base_nested_tables() {
        let params: CreateBaseParams = serde_json::from_value(json!({
            "name": "CRM",
            "workspace_id": "wsp1",
            "tables": [{"name": "Contacts", "fields": [{"name": "Name", "type": "singleLineText"}]}]
        }))
        .unwrap();
        assert_eq!(params.tables[0].fields[0].name, "Name");
    }
}
