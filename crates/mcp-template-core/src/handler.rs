use crate::config::ServerConfig;
use crate::error::Error;
use crate::protocol::create_initialize_result;
use crate::schema;
use crate::tools::{self, TemplateTools};
use crate::tools::utils::first_text;
use rust_mcp_schema::{
    CallToolRequest, CallToolRequestParams, CallToolResult, InitializeResult, ListToolsRequest,
    ListToolsResult, RpcError, Tool, schema_utils::CallToolError,
};
use serde_json::json;
use tracing::{debug, error, info, instrument};

/// Core MCP server handler with transport-agnostic dispatch
pub struct CoreHandler {
    config: ServerConfig,
    tools: Vec<Tool>,
}

impl CoreHandler {
    /// Create a handler advertising the default server identity
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self {
            config,
            tools: tools::registered_tools(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Tools advertised to clients, built once at construction
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Result of the initialize handshake for this handler
    pub fn server_details(&self) -> InitializeResult {
        create_initialize_result(&self.config.name, &self.config.version)
    }

    /// Handle tool listing requests (transport-agnostic)
    #[instrument(level = "debug", skip(self, _request))]
    pub async fn list_tools(
        &self,
        _request: ListToolsRequest,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        debug!("Handling list_tools request");
        info!(tool_count = self.tools.len(), "Listed available tools");

        Ok(ListToolsResult {
            tools: self.tools.clone(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Handle tool call requests (transport-agnostic)
    #[instrument(level = "debug", skip(self), fields(tool_name = %request.params.name))]
    pub async fn call_tool(
        &self,
        request: CallToolRequest,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        self.call_tool_params(request.params)
    }

    /// Validate arguments, then dispatch to the named tool
    pub fn call_tool_params(
        &self,
        mut params: CallToolRequestParams,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        let tool_name = params.name.clone();
        debug!(tool_name = %tool_name, "Validating tool arguments");

        let Some(specs) = tools::param_specs(&tool_name) else {
            error!(tool_name = %tool_name, "Unknown tool requested");
            return Err(CallToolError::new(Error::unknown_tool(&tool_name)));
        };

        if let Err(e) = schema::validate_arguments(&tool_name, specs, params.arguments.as_ref()) {
            error!(
                tool_name = %tool_name,
                field = e.field(),
                error = %e,
                "Rejected tool arguments"
            );
            return Err(CallToolError::new(e));
        }
        if let Some(arguments) = params.arguments.as_mut() {
            schema::normalize_arguments(specs, arguments);
        }

        let tool = TemplateTools::try_from(params).map_err(|e| {
            error!(tool_name = %tool_name, error = %e, "Failed to parse tool request");
            CallToolError::new(Error::protocol(format!(
                "Failed to parse tool request: {}",
                e
            )))
        })?;

        info!(tool_name = %tool_name, "Executing tool");
        let result = match tool {
            TemplateTools::TextProcessorTool(text) => text.call(),
            TemplateTools::DataGeneratorTool(generator) => generator.call(),
            TemplateTools::JsonFormatterTool(formatter) => formatter.call(),
        };

        match &result {
            Ok(_) => info!(tool_name = %tool_name, "Tool execution completed successfully"),
            Err(e) => error!(tool_name = %tool_name, error = %e, "Tool execution failed"),
        }

        result
    }
}

impl Default for CoreHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every tool once through the handler and log what comes back
pub async fn test_handler() -> anyhow::Result<()> {
    let handler = CoreHandler::new();

    tracing::info!("Testing tool handler...");
    for tool in handler.tools() {
        tracing::info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    let samples = [
        ("text-processor", json!({"text": "Hello World", "operation": "word-count"})),
        ("data-generator", json!({"type": "uuid", "count": 2})),
        ("json-formatter", json!({"json": "{\"ok\":true}"})),
    ];

    for (name, arguments) in samples {
        let params = CallToolRequestParams {
            name: name.to_string(),
            arguments: arguments.as_object().cloned(),
        };
        match handler.call_tool_params(params) {
            Ok(result) => {
                let text = first_text(&result).unwrap_or_default();
                tracing::info!(tool = name, "✅ {} returned: {}", name, text.replace('\n', " | "));
            }
            Err(e) => {
                tracing::error!(tool = name, "❌ {} failed: {}", name, e);
                return Err(anyhow::anyhow!("{} self-test failed: {}", name, e));
            }
        }
    }

    tracing::info!("All {} tools passed the self-test", handler.tools().len());
    Ok(())
}
