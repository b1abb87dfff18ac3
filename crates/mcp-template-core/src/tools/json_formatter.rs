use crate::config::tool_errors;
use crate::schema::{ParamSpec, ParamType};
use crate::tools::utils::text_result;
use rust_mcp_schema::{CallToolResult, schema_utils::CallToolError};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

const TOOL_NAME: &str = "json-formatter";

pub const DEFAULT_INDENT: i64 = 2;
pub const MAX_INDENT: i64 = 8;

pub const VALID_MARKER: &str = "✅ Valid JSON:";
pub const INVALID_MARKER: &str = "❌ Invalid JSON:";

#[mcp_tool(name = "json-formatter", description = "Format and validate JSON data")]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct JsonFormatterTool {
    /// JSON string to format
    pub json: String,

    /// Number of spaces for indentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<i64>,
}

impl JsonFormatterTool {
    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("json", ParamType::String, "JSON string to format"),
        ParamSpec::optional(
            "indent",
            ParamType::Integer,
            "Number of spaces for indentation",
        )
        .range(0, MAX_INDENT)
        .default_integer(DEFAULT_INDENT),
    ];

    pub fn call(self) -> Result<CallToolResult, CallToolError> {
        let indent = self.indent.unwrap_or(DEFAULT_INDENT);
        if !(0..=MAX_INDENT).contains(&indent) {
            return Err(CallToolError::new(tool_errors::invalid_param(
                TOOL_NAME,
                "indent",
                &format!("must be between 0 and {} (received {})", MAX_INDENT, indent),
            )));
        }

        // Parse failures are part of the tool's answer, not an error
        let output = match format_json(&self.json, indent as usize) {
            Ok(formatted) => format!("{}\n\n{}", VALID_MARKER, formatted),
            Err(message) => format!("{} {}", INVALID_MARKER, message),
        };

        Ok(text_result(output))
    }
}

/// Parse `input` and re-serialize it with `indent` spaces per nesting level.
///
/// Object keys keep their input order. An indent of zero produces compact
/// single-line output.
pub fn format_json(input: &str, indent: usize) -> Result<String, String> {
    let value: Value = serde_json::from_str(input).map_err(|e| describe_error(&e))?;

    if indent == 0 {
        return serde_json::to_string(&value).map_err(|e| describe_error(&e));
    }

    let indent_str = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent_str.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| describe_error(&e))?;
    String::from_utf8(buf).map_err(|e| e.to_string())
}

fn describe_error(err: &serde_json::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
