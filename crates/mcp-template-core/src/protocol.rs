// Re-export the rust-mcp-schema types the server surface is built from
pub use rust_mcp_schema::{
    // Core protocol types
    CallToolRequest,
    CallToolRequestParams,
    CallToolResult,
    CallToolResultContentItem,

    // Utility types
    Implementation,
    InitializeResult,
    ListToolsRequest,
    ListToolsResult,

    // Error types
    RpcError,
    // Schema and capability types
    ServerCapabilities,
    ServerCapabilitiesTools,
    TextContent,
    Tool,
    ToolInputSchema,
    // Schema utilities
    schema_utils::CallToolError,
};

// Constants
pub const PROTOCOL_VERSION: &str = "2025-03-26";

// Helper function to create server info
pub fn create_server_info(name: &str, version: &str) -> Implementation {
    Implementation {
        name: name.to_string(),
        version: version.to_string(),
    }
}

// The registry never changes after startup, so no list_changed notifications
pub fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        tools: Some(ServerCapabilitiesTools {
            list_changed: Some(false),
        }),
        completions: None,
        experimental: None,
        logging: None,
        prompts: None,
        resources: None,
    }
}

// Helper function to create InitializeResult
pub fn create_initialize_result(name: &str, version: &str) -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: create_server_capabilities(),
        server_info: create_server_info(name, version),
        instructions: Some(format!(
            "{} MCP Server - demonstration tools.

TOOLS:
- text-processor: uppercase | lowercase | reverse | word-count | char-count, with optional prefix
- data-generator: uuid | timestamp | random-number | lorem, count 1-10 (default 1)
- json-formatter: validate and pretty-print JSON, indent 0-8 (default 2)

Optional parameters: omit when not needed.
Out-of-range or unknown values are rejected before the tool runs.",
            name
        )),
        meta: None,
    }
}
