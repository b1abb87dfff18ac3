/// The name this MCP server advertises during initialization
pub const SERVER_NAME: &str = "mcp-server-template";

/// The version this MCP server advertises during initialization
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server identity reported to clients in the initialize handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

impl ServerConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SERVER_NAME, SERVER_VERSION)
    }
}

/// Create tool-specific errors with proper typing
pub mod tool_errors {
    use super::SERVER_NAME;
    use crate::error::Error;

    /// Argument failed schema validation
    pub fn invalid_param(tool: &str, field: &str, message: &str) -> Error {
        Error::validation_field(SERVER_NAME, tool, field, message)
    }
}
