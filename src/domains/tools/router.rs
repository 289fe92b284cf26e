//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every route funnels into the same [`ToolExecutor`], so the rmcp surface and
//! [`McpServer::call_tool`](crate::core::server::McpServer::call_tool) share one
//! credential and envelope path.

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::Tool;

use super::executor::ToolExecutor;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(executor: ToolExecutor) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::get_all_tools()
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(create_route(tool, executor.clone()))
        })
}

/// Route one tool's calls to the executor.
///
/// Argument problems surface as error envelopes, not protocol errors.
fn create_route<S>(tool: Tool, executor: ToolExecutor) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = tool.name.to_string();
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let executor = executor.clone();
        let name = name.clone();
        async move { Ok(executor.call(&name, args).await) }.boxed()
    })
}
