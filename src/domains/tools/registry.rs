//! Tool Registry - the catalog of every tool the server exposes.
//!
//! This module provides:
//! - The ordered list of tools with their category
//! - Tool metadata for listing
//! - Per-category counts for the server-info resource

use rmcp::model::Tool;

use super::definitions::*;

/// Part of the Airtable API a tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Records,
    Schema,
    Webhooks,
}

/// Catalog row for one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolEntry {
    pub name: &'static str,
    pub category: ToolCategory,
    to_tool: fn() -> Tool,
}

impl ToolEntry {
    fn of<T: AirtableTool>() -> Self {
        Self {
            name: T::NAME,
            category: T::CATEGORY,
            to_tool: T::to_tool,
        }
    }

    pub fn tool(&self) -> Tool {
        (self.to_tool)()
    }
}

/// Tool registry - the single source of truth for the tool list.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Every tool, records first, then schema, then webhooks.
    pub fn entries() -> Vec<ToolEntry> {
        vec![
            ToolEntry::of::<ListRecordsTool>(),
            ToolEntry::of::<GetRecordTool>(),
            ToolEntry::of::<CreateRecordsTool>(),
            ToolEntry::of::<UpdateRecordsTool>(),
            ToolEntry::of::<DeleteRecordsTool>(),
            ToolEntry::of::<UpsertRecordsTool>(),
            ToolEntry::of::<ListBasesTool>(),
            ToolEntry::of::<GetBaseSchemaTool>(),
            ToolEntry::of::<CreateBaseTool>(),
            ToolEntry::of::<CreateTableTool>(),
            ToolEntry::of::<UpdateTableTool>(),
            ToolEntry::of::<CreateFieldTool>(),
            ToolEntry::of::<UpdateFieldTool>(),
            ToolEntry::of::<CreateWebhookTool>(),
            ToolEntry::of::<ListWebhooksTool>(),
            ToolEntry::of::<RefreshWebhookTool>(),
            ToolEntry::of::<ListWebhookPayloadsTool>(),
            ToolEntry::of::<DeleteWebhookTool>(),
        ]
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        Self::entries().iter().map(|e| e.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        Self::entries().iter().map(ToolEntry::tool).collect()
    }

    /// Number of tools in a category.
    pub fn count(category: ToolCategory) -> usize {
        Self::entries()
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}
