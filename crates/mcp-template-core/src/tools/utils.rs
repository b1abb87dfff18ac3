use rust_mcp_schema::{CallToolResult, CallToolResultContentItem, TextContent};

/// Wrap a handler's output as a single text content block
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult {
        content: vec![CallToolResultContentItem::TextContent(TextContent::new(
            text.into(),
            None,
        ))],
        is_error: Some(false),
        meta: None,
    }
}

/// Extract the text of the first content block, if it is text
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    match result.content.first()? {
        CallToolResultContentItem::TextContent(text) => Some(text.text.as_str()),
        _ => None,
    }
}
