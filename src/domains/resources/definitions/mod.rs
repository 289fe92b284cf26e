//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and a
//! renderer. Bodies are rendered on every read from the current
//! [`ServerStatus`].

mod server_info;

pub use server_info::ServerInfoResource;

use super::error::ResourceError;

/// Process-level facts resources may report.
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub name: String,
    pub version: String,
    /// A static Airtable credential is configured.
    pub connected: bool,
}

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Render the resource body.
    fn render(status: &ServerStatus) -> Result<String, ResourceError>;
}
