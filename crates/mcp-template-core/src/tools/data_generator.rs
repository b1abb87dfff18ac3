use crate::config::tool_errors;
use crate::schema::{ParamSpec, ParamType};
use crate::tools::utils::text_result;
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_mcp_schema::{CallToolResult, schema_utils::CallToolError};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

const TOOL_NAME: &str = "data-generator";

pub const DEFAULT_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 10;

/// Exclusive upper bound for `random-number` items
pub const RANDOM_NUMBER_BOUND: u32 = 1_000_000;

const LOREM_WORDS: [&str; 8] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
];
const LOREM_LENGTH: usize = 5;

#[mcp_tool(
    name = "data-generator",
    description = "Generate sample data for testing purposes"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct DataGeneratorTool {
    /// Type of data to generate
    #[serde(rename = "type")]
    pub data_type: String,

    /// Number of items to generate (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Uuid,
    Timestamp,
    RandomNumber,
    Lorem,
}

impl DataKind {
    pub const NAMES: &'static [&'static str] = &["uuid", "timestamp", "random-number", "lorem"];

    /// Produce one item, drawing fresh entropy and reading the clock anew
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            DataKind::Uuid => Uuid::new_v4().to_string(),
            DataKind::Timestamp => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            DataKind::RandomNumber => rng.gen_range(0..RANDOM_NUMBER_BOUND).to_string(),
            DataKind::Lorem => lorem(rng),
        }
    }
}

impl FromStr for DataKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid" => Ok(DataKind::Uuid),
            "timestamp" => Ok(DataKind::Timestamp),
            "random-number" => Ok(DataKind::RandomNumber),
            "lorem" => Ok(DataKind::Lorem),
            other => Err(format!(
                "Unsupported type '{}'. Supported: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Five distinct vocabulary words in uniformly random order
fn lorem<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut words = LOREM_WORDS;
    let (picked, _) = words.partial_shuffle(rng, LOREM_LENGTH);
    picked.join(" ")
}

/// Generate `count` items of `kind`, one per line
pub fn generate_items<R: Rng + ?Sized>(kind: DataKind, count: usize, rng: &mut R) -> String {
    (0..count)
        .map(|_| kind.generate(rng))
        .collect::<Vec<_>>()
        .join("\n")
}

impl DataGeneratorTool {
    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("type", ParamType::String, "Type of data to generate")
            .one_of(DataKind::NAMES),
        ParamSpec::optional(
            "count",
            ParamType::Integer,
            "Number of items to generate (1-10)",
        )
        .range(1, MAX_COUNT)
        .default_integer(DEFAULT_COUNT),
    ];

    pub fn call(self) -> Result<CallToolResult, CallToolError> {
        let kind = DataKind::from_str(&self.data_type)
            .map_err(|e| CallToolError::new(tool_errors::invalid_param(TOOL_NAME, "type", &e)))?;

        let count = self.count.unwrap_or(DEFAULT_COUNT);
        if !(1..=MAX_COUNT).contains(&count) {
            return Err(CallToolError::new(tool_errors::invalid_param(
                TOOL_NAME,
                "count",
                &format!("must be between 1 and {} (received {})", MAX_COUNT, count),
            )));
        }

        let output = generate_items(kind, count as usize, &mut rand::thread_rng());
        Ok(text_result(output))
    }
}
