//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::definitions::ServerStatus;
use super::error::ResourceError;
use super::registry::{ResourceEntry, get_all_resources};

/// Service for listing and reading resources.
pub struct ResourceService {
    status: ServerStatus,
    resources: Vec<ResourceEntry>,
}

impl ResourceService {
    pub fn new(status: ServerStatus) -> Self {
        let resources = get_all_resources();
        info!("Registered {} resources", resources.len());
        Self { status, resources }
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources.iter().map(|e| e.resource.clone()).collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|e| e.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let mut content = ResourceContents::text((entry.render)(&self.status)?, uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut content {
            *mime_type = entry.resource.raw.mime_type.clone();
        }

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}
