pub mod stdio;

pub use stdio::{StdioHandler, run_stdio_server};
