//! MCP-facing domains: tools, resources and prompts.

pub mod prompts;
pub mod resources;
pub mod tools;
