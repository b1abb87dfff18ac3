use thiserror::Error;

/// Structured error types for the template server
#[derive(Debug, Error)]
pub enum Error {
    /// Transport layer errors
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Protocol-level errors (malformed requests, version mismatches, etc.)
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// Arguments rejected before a handler runs
    #[error("{server}:{tool_name} - Invalid parameter{}: {message}", field_suffix(.field))]
    Validation {
        server: String,
        tool_name: String,
        message: String,
        field: Option<String>,
    },

    /// No tool registered under the requested name
    #[error("Unknown tool: '{0}'")]
    UnknownTool(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" '{}'", f))
        .unwrap_or_default()
}

impl Error {
    /// Create a new transport error with context
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a validation error naming the offending parameter
    pub fn validation_field(
        server: &str,
        tool: &str,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            server: server.to_string(),
            tool_name: tool.to_string(),
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Parameter name for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_server_tool_and_field() {
        let err = Error::validation_field("srv", "data-generator", "count", "must be at most 10");
        assert_eq!(
            err.to_string(),
            "srv:data-generator - Invalid parameter 'count': must be at most 10"
        );
        assert_eq!(err.field(), Some("count"));
    }

    #[test]
    fn field_is_absent_for_other_errors() {
        let err = Error::unknown_tool("calculator");
        assert_eq!(err.to_string(), "Unknown tool: 'calculator'");
        assert_eq!(err.field(), None);
    }
}
