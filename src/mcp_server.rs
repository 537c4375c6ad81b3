use crate::constants::{
    DEPTH_FIELD_DESCRIPTION, QUERY_FIELD_DESCRIPTION, SERVER_NAME, TOOL_SEARCH_WEB,
    TOOL_SEARCH_WEB_DESCRIPTION,
};
use crate::error::AppError;
use crate::gateway::SearchGateway;
use crate::types::SearchRequest;
use mcpkit::capability::{ServerCapabilities, ServerInfo};
use mcpkit::error::McpError;
use mcpkit::types::content::Content;
use mcpkit::types::tool::{CallToolResult, Tool, ToolAnnotations, ToolOutput};
use mcpkit::{Context, ServerHandler, ToolHandler};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// MCP handler exposing the single `search-web` tool.
#[derive(Debug, Clone)]
pub struct LinkupMcpServer {
    gateway: Arc<SearchGateway>,
}

impl LinkupMcpServer {
    #[must_use]
    pub fn new(gateway: SearchGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    #[must_use]
    pub fn gateway(&self) -> &SearchGateway {
        &self.gateway
    }

    #[must_use]
    pub fn server_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn tools() -> Vec<Tool> {
        vec![search_tool_schema()]
    }

    async fn search_web(&self, args: Value) -> ToolOutput {
        let request = match parse_tool_args::<SearchRequest>(args, TOOL_SEARCH_WEB) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(error = %error.message(), "rejected tool arguments");
                return error_tool_output(&error);
            }
        };

        tracing::info!(depth = request.depth.as_str(), "searching");
        match self.gateway.search(request).await {
            Ok(result) => ToolOutput::Success(result),
            Err(error) => {
                tracing::warn!(error = %error.message(), "search failed");
                error_tool_output(&error)
            }
        }
    }
}

impl ServerHandler for LinkupMcpServer {
    fn server_info(&self) -> ServerInfo {
        ServerInfo::new(SERVER_NAME, Self::server_version())
    }

    fn capabilities(&self) -> ServerCapabilities {
        ServerCapabilities::new().with_tools()
    }
}

impl ToolHandler for LinkupMcpServer {
    async fn list_tools(&self, _ctx: &Context<'_>) -> Result<Vec<Tool>, McpError> {
        Ok(Self::tools())
    }

    async fn call_tool(
        &self,
        name: &str,
        args: Value,
        _ctx: &Context<'_>,
    ) -> Result<ToolOutput, McpError> {
        let trace_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("call_tool", tool = name, trace_id = %trace_id);

        match name {
            TOOL_SEARCH_WEB => Ok(self.search_web(args).instrument(span).await),
            _ => Err(McpError::invalid_params(
                "tools/call",
                format!("Unknown tool: {name}"),
            )),
        }
    }
}

fn normalize_args(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    }
}

fn parse_tool_args<T>(value: Value, tool_name: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(normalize_args(value)).map_err(|error| {
        AppError::InvalidArgument(format!("Invalid arguments for {tool_name}: {error}"))
    })
}

fn error_tool_output(error: &AppError) -> ToolOutput {
    ToolOutput::Success(CallToolResult {
        content: vec![Content::text(error.message())],
        is_error: Some(true),
    })
}

/// Declared schema of `search-web`. Hosts validate calls against it before
/// dispatching.
#[must_use]
pub fn search_tool_schema() -> Tool {
    Tool::new(TOOL_SEARCH_WEB)
        .description(TOOL_SEARCH_WEB_DESCRIPTION)
        .input_schema(serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["query", "depth"],
            "properties": {
                "query": {
                    "type": "string",
                    "description": QUERY_FIELD_DESCRIPTION
                },
                "depth": {
                    "type": "string",
                    "enum": ["standard", "deep"],
                    "description": DEPTH_FIELD_DESCRIPTION
                }
            }
        }))
        .annotations(ToolAnnotations::read_only())
}
