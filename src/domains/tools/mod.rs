//! Tools domain module.
//!
//! The 18 Airtable tools and the machinery that runs them.
//!
//! ## Architecture
//!
//! - `definitions/` - Parameter structs, names, descriptions and hints, one
//!   file per API area
//! - `dispatch.rs` - Tool name and argument bag to a typed [`AirtableOperation`]
//! - `executor.rs` - Credential resolution and the result envelope
//! - `registry.rs` - Tool catalog and category counts
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and an [`AirtableTool`](definitions::AirtableTool)
//!    impl in the matching `definitions/` file
//! 2. Add a variant to [`AirtableOperation`] with its `dispatch` arm,
//!    `tool_name` arm and `execute` arm
//! 3. Add it to `ToolRegistry::entries`
//!
//! The router and `server.rs` pick it up from the registry.

pub mod definitions;
mod dispatch;
mod error;
mod executor;
mod registry;
pub mod router;

pub use dispatch::{AirtableOperation, dispatch};
pub use error::ToolError;
pub use executor::{CREDENTIAL_ARGUMENT, ToolExecutor};
pub use registry::{ToolCategory, ToolEntry, ToolRegistry};
pub use router::build_tool_router;
