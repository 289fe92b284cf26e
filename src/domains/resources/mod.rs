//! Resources domain module.
//!
//! Read-only data a client can fetch by URI. There is one resource,
//! `airtable://server-info`, describing this server and its tool catalog.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per resource
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/`
//! 2. Implement the `ResourceDefinition` trait
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{ResourceDefinition, ServerStatus};
pub use error::ResourceError;
pub use registry::{ResourceEntry, get_all_resources};
pub use service::ResourceService;
