//! Tool definitions module.
//!
//! Tools are grouped by the part of the Airtable API they cover:
//! - `records` - record CRUD and upsert (6 tools)
//! - `schema` - bases, tables and fields (7 tools)
//! - `webhooks` - webhook lifecycle and payload polling (5 tools)
//!
//! Each tool is a unit struct implementing [`AirtableTool`]: its wire name,
//! description, safety hints, and the typed parameter struct its argument
//! bag is shaped into.

pub mod records;
pub mod schema;
pub mod webhooks;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::dispatch::AirtableOperation;
use super::error::ToolError;
use super::registry::ToolCategory;

pub use records::{
    CreateRecordsTool, DeleteRecordsTool, GetRecordTool, ListRecordsTool, UpdateRecordsTool,
    UpsertRecordsTool,
};
pub use schema::{
    CreateBaseTool, CreateFieldTool, CreateTableTool, GetBaseSchemaTool, ListBasesTool,
    UpdateFieldTool, UpdateTableTool,
};
pub use webhooks::{
    CreateWebhookTool, DeleteWebhookTool, ListWebhookPayloadsTool, ListWebhooksTool,
    RefreshWebhookTool,
};

/// Side-effect class of a tool, advertised so hosts can gate calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hints {
    pub read_only: bool,
    pub destructive: bool,
    pub idempotent: bool,
    pub open_world: bool,
}

impl Hints {
    /// Reads remote data.
    pub const READ: Self = Self {
        read_only: true,
        destructive: false,
        idempotent: true,
        open_world: true,
    };

    /// Creates or changes data without destroying any.
    pub const WRITE: Self = Self {
        read_only: false,
        destructive: false,
        idempotent: false,
        open_world: false,
    };

    /// Safe to repeat with the same arguments.
    pub const IDEMPOTENT_WRITE: Self = Self {
        idempotent: true,
        ..Self::WRITE
    };

    /// Irreversibly removes data.
    pub const DESTRUCTIVE: Self = Self {
        destructive: true,
        ..Self::WRITE
    };
}

/// Trait for tool definitions.
pub trait AirtableTool {
    /// Wire name of the tool.
    const NAME: &'static str;

    /// Human-readable title.
    const TITLE: &'static str;

    /// Description shown to clients.
    const DESCRIPTION: &'static str;

    const CATEGORY: ToolCategory;

    const HINTS: Hints;

    /// Shape of the argument bag.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Wrap parsed parameters into the operation they describe.
    fn operation(params: Self::Params) -> AirtableOperation;

    /// Shape an argument bag into this tool's operation.
    ///
    /// Keys the parameter struct does not know (such as the per-call
    /// credential) are ignored.
    fn parse(arguments: JsonObject) -> Result<AirtableOperation, ToolError> {
        serde_json::from_value::<Self::Params>(serde_json::Value::Object(arguments))
            .map(Self::operation)
            .map_err(|e| ToolError::invalid_arguments(Self::NAME, e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: Some(ToolAnnotations {
                title: Some(Self::TITLE.to_string()),
                read_only_hint: Some(Self::HINTS.read_only),
                destructive_hint: Some(Self::HINTS.destructive),
                idempotent_hint: Some(Self::HINTS.idempotent),
                open_world_hint: Some(Self::HINTS.open_world),
            }),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_presets() {
        assert!(Hints::READ.read_only);
        assert!(!Hints::WRITE.destructive);
        assert!(Hints::IDEMPOTENT_WRITE.idempotent);
        assert!(!Hints::IDEMPOTENT_WRITE.read_only);
        assert!(Hints::DESTRUCTIVE.destructive);
        assert!(!Hints::DESTRUCTIVE.idempotent);
    }

    #[test]
    fn test_to_tool_carries_annotations() {
        let tool = DeleteRecordsTool::to_tool();
        assert_eq!(tool.name, "airtable_delete_records");

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(false));
        assert_eq!(annotations.destructive_hint, Some(true));
        assert_eq!(annotations.title.as_deref(), Some("Delete Records"));
    }

    #[test]
    fn test_input_schema_lists_wire_names() {
        let tool = ListRecordsTool::to_tool();
        let properties = tool.input_schema["properties"].as_object().unwrap();
        for key in ["base_id", "table_id_or_name", "page_size", "sort", "filter_by_formula"] {
            assert!(properties.contains_key(key), "missing property {}", key);
        }
    }
}
