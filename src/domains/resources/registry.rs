//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource, Resource};

use super::definitions::{ResourceDefinition, ServerInfoResource, ServerStatus};
use super::error::ResourceError;

/// A registered resource: its listing metadata and its renderer.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub render: fn(&ServerStatus) -> Result<String, ResourceError>,
}

fn build<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        render: R::render,
    }
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build::<ServerInfoResource>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].resource.raw.uri, "airtable://server-info");
        assert_eq!(
            resources[0].resource.raw.mime_type.as_deref(),
            Some("application/json")
        );
    }
}
