use crate::config::tool_errors;
use crate::schema::{ParamSpec, ParamType};
use crate::tools::utils::text_result;
use rust_mcp_schema::{CallToolResult, schema_utils::CallToolError};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

const TOOL_NAME: &str = "text-processor";

#[mcp_tool(
    name = "text-processor",
    description = "A versatile text processing tool that can transform text in various ways"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct TextProcessorTool {
    /// The text to process
    pub text: String,

    /// The operation to perform on the text
    pub operation: String,

    /// Optional prefix to add to the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOperation {
    Uppercase,
    Lowercase,
    Reverse,
    WordCount,
    CharCount,
}

impl TextOperation {
    pub const NAMES: &'static [&'static str] =
        &["uppercase", "lowercase", "reverse", "word-count", "char-count"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextOperation::Uppercase => "uppercase",
            TextOperation::Lowercase => "lowercase",
            TextOperation::Reverse => "reverse",
            TextOperation::WordCount => "word-count",
            TextOperation::CharCount => "char-count",
        }
    }

    /// Apply the operation to `text`.
    ///
    /// `Reverse` works on Unicode scalar values, so grapheme clusters built
    /// from several code points (combining accents, flags, ZWJ emoji) come
    /// out split or reordered. `CharCount` reports UTF-16 code units, the
    /// length JSON clients on the other side of the wire observe.
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextOperation::Uppercase => text.to_uppercase(),
            TextOperation::Lowercase => text.to_lowercase(),
            TextOperation::Reverse => text.chars().rev().collect(),
            TextOperation::WordCount => format!("Word count: {}", word_count(text)),
            TextOperation::CharCount => {
                format!("Character count: {}", text.encode_utf16().count())
            }
        }
    }
}

impl FromStr for TextOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uppercase" => Ok(TextOperation::Uppercase),
            "lowercase" => Ok(TextOperation::Lowercase),
            "reverse" => Ok(TextOperation::Reverse),
            "word-count" => Ok(TextOperation::WordCount),
            "char-count" => Ok(TextOperation::CharCount),
            other => Err(format!(
                "Unsupported operation '{}'. Supported: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Whitespace-separated segments; empty or all-whitespace input counts as 0
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

impl TextProcessorTool {
    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("text", ParamType::String, "The text to process"),
        ParamSpec::required(
            "operation",
            ParamType::String,
            "The operation to perform on the text",
        )
        .one_of(TextOperation::NAMES),
        ParamSpec::optional(
            "prefix",
            ParamType::String,
            "Optional prefix to add to the result",
        ),
    ];

    pub fn call(self) -> Result<CallToolResult, CallToolError> {
        let operation = TextOperation::from_str(&self.operation).map_err(|e| {
            CallToolError::new(tool_errors::invalid_param(TOOL_NAME, "operation", &e))
        })?;
        debug!(operation = operation.as_str(), "Applying text operation");

        let result = operation.apply(&self.text);
        let output = match self.prefix {
            Some(prefix) => format!("{}{}", prefix, result),
            None => result,
        };

        Ok(text_result(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::utils::first_text;

    fn run(text: &str, operation: &str, prefix: Option<&str>) -> String {
        let tool = TextProcessorTool {
            text: text.to_string(),
            operation: operation.to_string(),
            prefix: prefix.map(str::to_string),
        };
        let result = tool.call().unwrap();
        first_text(&result).unwrap().to_string()
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(run("abc", "uppercase", None), "ABC");
        assert_eq!(run("Hello World", "lowercase", None), "hello world");
        assert_eq!(run("straße", "uppercase", None), "STRASSE");
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        let once = TextOperation::Uppercase.apply("Mixed Case ñ");
        assert_eq!(TextOperation::Uppercase.apply(&once), once);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(run("abc", "reverse", None), "cba");
        assert_eq!(run("", "reverse", None), "");
        let text = "héllo wörld";
        let twice = TextOperation::Reverse.apply(&TextOperation::Reverse.apply(text));
        assert_eq!(twice, text);
    }

    #[test]
    fn test_reverse_splits_combining_sequences() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(run("e\u{301}x", "reverse", None), "x\u{301}e");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(run("Hello World", "word-count", None), "Word count: 2");
        assert_eq!(run("  one\ttwo\n three  ", "word-count", None), "Word count: 3");
        assert_eq!(run("", "word-count", None), "Word count: 0");
        assert_eq!(run("   \n\t", "word-count", None), "Word count: 0");
    }

    #[test]
    fn test_char_count() {
        assert_eq!(run("hello", "char-count", None), "Character count: 5");
        assert_eq!(run("", "char-count", None), "Character count: 0");
        assert_eq!(run("é", "char-count", None), "Character count: 1");
        // Astral code points occupy two UTF-16 units
        assert_eq!(run("😀", "char-count", None), "Character count: 2");
    }

    #[test]
    fn test_prefix_is_prepended_without_separator() {
        assert_eq!(run("abc", "uppercase", Some(">> ")), ">> ABC");
        assert_eq!(run("a b", "word-count", Some("#")), "#Word count: 2");
        assert_eq!(run("abc", "reverse", Some("")), "cba");
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let tool = TextProcessorTool {
            text: "abc".to_string(),
            operation: "shout".to_string(),
            prefix: None,
        };
        let err = tool.call().unwrap_err();
        assert!(err.to_string().contains("Unsupported operation 'shout'"));
    }

    #[test]
    fn test_operation_names_round_trip() {
        for name in TextOperation::NAMES {
            assert_eq!(TextOperation::from_str(name).unwrap().as_str(), *name);
        }
    }
}
