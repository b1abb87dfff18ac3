mod data_generator;
mod json_formatter;
mod text_processor;
pub mod utils;

use crate::schema::{self, ParamSpec};
use rust_mcp_schema::Tool;
use rust_mcp_sdk::tool_box;

pub use data_generator::{DataGeneratorTool, DataKind, generate_items};
pub use json_formatter::{INVALID_MARKER, JsonFormatterTool, VALID_MARKER, format_json};
pub use text_processor::{TextOperation, TextProcessorTool};

tool_box!(
    TemplateTools,
    [TextProcessorTool, DataGeneratorTool, JsonFormatterTool]
);

/// Parameter table for a registered tool name
pub fn param_specs(tool_name: &str) -> Option<&'static [ParamSpec]> {
    match tool_name {
        name if name == TextProcessorTool::tool_name() => Some(TextProcessorTool::PARAMS),
        name if name == DataGeneratorTool::tool_name() => Some(DataGeneratorTool::PARAMS),
        name if name == JsonFormatterTool::tool_name() => Some(JsonFormatterTool::PARAMS),
        _ => None,
    }
}

/// The advertised tool list, with constraints from each parameter table
pub fn registered_tools() -> Vec<Tool> {
    TemplateTools::tools()
        .into_iter()
        .map(|mut tool| {
            if let Some(params) = param_specs(&tool.name) {
                schema::apply_to_tool(&mut tool, params);
            }
            tool
        })
        .collect()
}

/// The advertised tool list as pretty-printed JSON
pub fn registered_tools_json() -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(&registered_tools())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique_and_stable() {
        let tools = registered_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["text-processor", "data-generator", "json-formatter"]);
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn every_tool_has_a_parameter_table() {
        for tool in TemplateTools::tools() {
            assert!(param_specs(&tool.name).is_some(), "{}", tool.name);
        }
        assert!(param_specs("nope").is_none());
    }

    #[test]
    fn advertised_schema_carries_constraints() {
        let tools = registered_tools();
        let generator = tools.iter().find(|t| t.name == "data-generator").unwrap();
        let properties = generator.input_schema.properties.as_ref().unwrap();
        assert_eq!(properties["count"]["minimum"], 1);
        assert_eq!(properties["count"]["maximum"], 10);
        assert_eq!(properties["count"]["default"], 1);
        assert_eq!(
            properties["type"]["enum"],
            serde_json::json!(["uuid", "timestamp", "random-number", "lorem"])
        );
        assert_eq!(generator.input_schema.required, vec!["type".to_string()]);

        let processor = tools.iter().find(|t| t.name == "text-processor").unwrap();
        let mut required = processor.input_schema.required.clone();
        required.sort();
        assert_eq!(required, vec!["operation".to_string(), "text".to_string()]);
    }

    #[test]
    fn tool_list_serializes_with_input_schemas() {
        let json = registered_tools_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let tools = value.as_array().unwrap();
        assert_eq!(tools.len(), 3);
        let formatter = &tools[2];
        assert_eq!(formatter["name"], "json-formatter");
        assert_eq!(formatter["inputSchema"]["type"], "object");
        assert_eq!(formatter["inputSchema"]["properties"]["indent"]["maximum"], 8);
    }
}
