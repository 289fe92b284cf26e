//! Server info resource definition.

use serde::Serialize;

use super::{ResourceDefinition, ServerStatus};
use crate::domains::resources::error::ResourceError;
use crate::domains::tools::{ToolCategory, ToolRegistry};

/// Connection status and tool catalog summary.
pub struct ServerInfoResource;

#[derive(Debug, Serialize)]
struct ServerInfo<'a> {
    name: &'a str,
    version: &'a str,
    connected: bool,
    tools_available: usize,
    tool_categories: ToolCategories,
}

#[derive(Debug, Serialize)]
struct ToolCategories {
    records: usize,
    bases_and_schema: usize,
    webhooks: usize,
}

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "airtable://server-info";
    const NAME: &'static str = "server-info";
    const DESCRIPTION: &'static str =
        "Connection status and available tools for this Airtable MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn render(status: &ServerStatus) -> Result<String, ResourceError> {
        let info = ServerInfo {
            name: &status.name,
            version: &status.version,
            connected: status.connected,
            tools_available: ToolRegistry::entries().len(),
            tool_categories: ToolCategories {
                records: ToolRegistry::count(ToolCategory::Records),
                bases_and_schema: ToolRegistry::count(ToolCategory::Schema),
                webhooks: ToolRegistry::count(ToolCategory::Webhooks),
            },
        };
        Ok(serde_json::to_string_pretty(&info)?)
    }
}
