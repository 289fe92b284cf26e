//! Airtable MCP Server
//!
//! Exposes the Airtable REST API (records, bases and schema, webhooks) as
//! Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **airtable**: REST client, one method per remote operation
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: what the server exposes
//!   - **tools**: the 18 Airtable tools, dispatch and the result envelope
//!   - **resources**: the `airtable://server-info` status resource
//!   - **prompts**: usage guides
//!
//! # Example
//!
//! ```rust,no_run
//! use airtable_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let result = server
//!         .call_tool("airtable_list_bases", serde_json::Map::new())
//!         .await;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod airtable;
pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
