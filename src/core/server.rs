//! MCP Server implementation.
//!
//! The handler delegates to the domain services: tool calls go through the
//! rmcp `ToolRouter` built in `domains/tools/router.rs`, which in turn runs
//! everything through one [`ToolExecutor`]. Adding a tool does not touch
//! this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    prompts::PromptService,
    resources::{ResourceService, ServerStatus},
    tools::{ToolExecutor, build_tool_router},
};

const INSTRUCTIONS: &str = "Airtable MCP server. Tools cover records (list, get, create, update, delete, upsert), \
bases and schema (list bases, read schema, create bases, tables and fields, rename tables and fields) \
and webhooks. Call airtable_list_bases and airtable_get_base_schema first to discover IDs. \
If no token is configured, pass AIRTABLE_PAT in the arguments of every call.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    executor: ToolExecutor,

    resource_service: Arc<ResourceService>,

    prompt_service: Arc<PromptService>,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        if config.airtable.api_url.is_empty() {
            return Err(Error::config("AIRTABLE_API_URL must not be empty"));
        }

        let executor = ToolExecutor::new(&config.airtable)?;
        let resource_service = Arc::new(ResourceService::new(ServerStatus {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            connected: executor.has_static_credential(),
        }));

        Ok(Self {
            tool_router: build_tool_router::<Self>(executor.clone()),
            executor,
            config: Arc::new(config),
            resource_service,
            prompt_service: Arc::new(PromptService::new()),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Call a tool by name, outside of any transport.
    ///
    /// Same path as a protocol `tools/call`: the result is always an
    /// envelope, never an error.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.executor.call(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: self.prompt_service.list_prompts(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
