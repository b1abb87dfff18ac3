pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod schema;
pub mod tools;
pub mod transports;

pub use config::{SERVER_NAME, SERVER_VERSION, ServerConfig};
pub use error::{Error, Result};
pub use handler::{CoreHandler, test_handler};
pub use protocol::*;
pub use tools::{DataGeneratorTool, JsonFormatterTool, TemplateTools, TextProcessorTool};
pub use transports::{StdioHandler, run_stdio_server};
