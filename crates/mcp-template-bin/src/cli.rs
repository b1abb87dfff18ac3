use clap::{Parser, Subcommand};
use mcp_template_core::{SERVER_NAME, ServerConfig};

#[derive(Parser)]
#[command(name = "mcp-server-template")]
#[command(author, version, about = "MCP Server Template", long_about = None)]
pub struct Cli {
    /// Defaults to `stdio` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server using stdio transport
    Stdio {
        /// Server name reported during initialization
        #[arg(long, default_value = SERVER_NAME)]
        name: String,

        /// Server version reported during initialization
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        version: String,
    },
    /// Run every tool once and report the results
    Test,
    /// Show various MCP server components
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

impl Commands {
    pub fn stdio_default() -> Self {
        let config = ServerConfig::default();
        Commands::Stdio {
            name: config.name,
            version: config.version,
        }
    }
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// Show all available tools with their MCP naming convention
    Tools {
        /// Custom name to replace the server name in tool names
        #[arg(long, default_value = SERVER_NAME)]
        name: String,
    },
    /// Print the advertised tool list, including input schemas, as JSON
    Schema,
}
