//! Declarative parameter descriptors for the registered tools.
//!
//! Each tool publishes a static `&[ParamSpec]` table. The table is used twice:
//! to reject malformed arguments before a handler runs, and to enrich the
//! JSON schema advertised through `tools/list` with enums, ranges and defaults.

use crate::config::tool_errors;
use crate::error::Result;
use rust_mcp_schema::Tool;
use serde_json::{Map, Value, json};

/// JSON type accepted for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
        }
    }
}

/// Constraint applied on top of the JSON type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    None,
    /// Value must be one of the listed strings
    OneOf(&'static [&'static str]),
    /// Inclusive integer range
    Range { min: i64, max: i64 },
}

/// Default applied when an optional parameter is omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    None,
    Integer(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub required: bool,
    pub default: ParamDefault,
    pub constraint: Constraint,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: ParamDefault::None,
            constraint: Constraint::None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: ParamDefault::None,
            constraint: Constraint::None,
            description,
        }
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.constraint = Constraint::OneOf(values);
        self
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.constraint = Constraint::Range { min, max };
        self
    }

    pub const fn default_integer(mut self, value: i64) -> Self {
        self.default = ParamDefault::Integer(value);
        self
    }

    /// Check a single supplied value against type and constraint
    fn check(&self, tool: &str, value: &Value) -> Result<()> {
        match self.kind {
            ParamType::String => {
                let Some(s) = value.as_str() else {
                    return Err(tool_errors::invalid_param(
                        tool,
                        self.name,
                        &format!("expected string, received {}", json_type_name(value)),
                    ));
                };
                if let Constraint::OneOf(allowed) = self.constraint {
                    if !allowed.contains(&s) {
                        return Err(tool_errors::invalid_param(
                            tool,
                            self.name,
                            &format!("'{}' is not one of: {}", s, allowed.join(", ")),
                        ));
                    }
                }
            }
            ParamType::Integer => {
                let Some(n) = as_integer(value) else {
                    let message = if value.is_number() {
                        format!("expected integer, received {}", value)
                    } else {
                        format!("expected integer, received {}", json_type_name(value))
                    };
                    return Err(tool_errors::invalid_param(tool, self.name, &message));
                };
                if let Constraint::Range { min, max } = self.constraint {
                    if n < min {
                        return Err(tool_errors::invalid_param(
                            tool,
                            self.name,
                            &format!("must be at least {} (received {})", min, n),
                        ));
                    }
                    if n > max {
                        return Err(tool_errors::invalid_param(
                            tool,
                            self.name,
                            &format!("must be at most {} (received {})", max, n),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// JSON schema property for this parameter
    pub fn to_property(&self) -> Map<String, Value> {
        let mut property = Map::new();
        property.insert("type".to_string(), json!(self.kind.as_str()));
        property.insert("description".to_string(), json!(self.description));
        match self.constraint {
            Constraint::None => {}
            Constraint::OneOf(values) => {
                property.insert("enum".to_string(), json!(values));
            }
            Constraint::Range { min, max } => {
                property.insert("minimum".to_string(), json!(min));
                property.insert("maximum".to_string(), json!(max));
            }
        }
        if let ParamDefault::Integer(value) = self.default {
            property.insert("default".to_string(), json!(value));
        }
        property
    }
}

/// Integer value of a JSON number with no fractional part (`3` or `3.0`)
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate raw call arguments against a tool's parameter table.
///
/// Missing required parameters, wrong JSON types, values outside an
/// enumeration and integers out of range are all rejected. Integer
/// parameters accept numbers with a zero fractional part. A `null` for an
/// optional parameter counts as omitted. Unknown keys are ignored.
pub fn validate_arguments(
    tool: &str,
    params: &[ParamSpec],
    arguments: Option<&Map<String, Value>>,
) -> Result<()> {
    for spec in params {
        match arguments.and_then(|args| args.get(spec.name)) {
            None | Some(Value::Null) if spec.required => {
                return Err(tool_errors::invalid_param(
                    tool,
                    spec.name,
                    "required parameter is missing",
                ));
            }
            None | Some(Value::Null) => {}
            Some(value) => spec.check(tool, value)?,
        }
    }
    Ok(())
}

/// Prepare validated arguments for typed deserialization: explicit `null`s
/// for optional parameters are dropped, and integral floats such as `3.0`
/// become integers.
pub fn normalize_arguments(params: &[ParamSpec], arguments: &mut Map<String, Value>) {
    for spec in params {
        match arguments.get(spec.name) {
            Some(Value::Null) if !spec.required => {
                arguments.remove(spec.name);
            }
            Some(value) if spec.kind == ParamType::Integer && !value.is_i64() => {
                if let Some(n) = as_integer(value) {
                    arguments.insert(spec.name.to_string(), json!(n));
                }
            }
            _ => {}
        }
    }
}

/// Overwrite the advertised input schema with the descriptor table
pub fn apply_to_tool(tool: &mut Tool, params: &[ParamSpec]) {
    let properties = tool.input_schema.properties.get_or_insert_with(Default::default);
    properties.retain(|name, _| params.iter().any(|spec| spec.name == name.as_str()));
    for spec in params {
        let property = properties.entry(spec.name.to_string()).or_default();
        for (key, value) in spec.to_property() {
            property.insert(key, value);
        }
    }
    tool.input_schema.required = params
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.name.to_string())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::required("mode", ParamType::String, "Mode").one_of(&["a", "b"]),
        ParamSpec::optional("level", ParamType::Integer, "Level")
            .range(0, 8)
            .default_integer(2),
        ParamSpec::optional("label", ParamType::String, "Label"),
    ];

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_valid_arguments() {
        let a = args(json!({"mode": "a", "level": 8, "label": "x", "extra": true}));
        assert!(validate_arguments("t", PARAMS, Some(&a)).is_ok());
    }

    #[test]
    fn optional_parameters_may_be_omitted_or_null() {
        let a = args(json!({"mode": "b", "level": null}));
        assert!(validate_arguments("t", PARAMS, Some(&a)).is_ok());
    }

    #[test]
    fn rejects_missing_required() {
        let err = validate_arguments("t", PARAMS, None).unwrap_err();
        assert_eq!(err.field(), Some("mode"));
        assert!(err.to_string().contains("required parameter is missing"));
    }

    #[test]
    fn rejects_value_outside_enumeration() {
        let a = args(json!({"mode": "c"}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("'c' is not one of: a, b"));
    }

    #[test]
    fn rejects_out_of_range_integers() {
        for level in [-1, 9] {
            let a = args(json!({"mode": "a", "level": level}));
            let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
            assert_eq!(err.field(), Some("level"));
        }
    }

    #[test]
    fn rejects_wrong_types() {
        let a = args(json!({"mode": 1}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("expected string, received number"));

        let a = args(json!({"mode": "a", "level": 2.5}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("expected integer, received 2.5"));

        let a = args(json!({"mode": "a", "level": "2"}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("expected integer, received string"));
    }

    #[test]
    fn accepts_integral_floats() {
        let a = args(json!({"mode": "a", "level": 3.0}));
        assert!(validate_arguments("t", PARAMS, Some(&a)).is_ok());

        let a = args(json!({"mode": "a", "level": 9.0}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("must be at most 8 (received 9)"));

        let a = args(json!({"mode": "a", "level": 1e300}));
        let err = validate_arguments("t", PARAMS, Some(&a)).unwrap_err();
        assert!(err.to_string().contains("expected integer"));
    }

    #[test]
    fn normalize_turns_integral_floats_into_integers() {
        let mut a = args(json!({"mode": "a", "level": 2.0}));
        normalize_arguments(PARAMS, &mut a);
        assert!(a["level"].is_i64());
        assert_eq!(a["level"], 2);
    }

    #[test]
    fn normalize_removes_optional_nulls_only() {
        let mut a = args(json!({"mode": null, "level": null, "label": "x"}));
        normalize_arguments(PARAMS, &mut a);
        assert!(a.contains_key("mode"));
        assert!(!a.contains_key("level"));
        assert!(a.contains_key("label"));
    }

    #[test]
    fn property_carries_constraints() {
        let level = PARAMS[1].to_property();
        assert_eq!(level["type"], "integer");
        assert_eq!(level["minimum"], 0);
        assert_eq!(level["maximum"], 8);
        assert_eq!(level["default"], 2);

        let mode = PARAMS[0].to_property();
        assert_eq!(mode["enum"], json!(["a", "b"]));
        assert!(mode.get("default").is_none());
    }
}
