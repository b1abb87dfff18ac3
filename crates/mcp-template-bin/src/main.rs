use anyhow::Result;
use clap::Parser;
use mcp_template_core::{ServerConfig, tools};
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
use cli::{Cli, Commands, ShowCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries protocol frames, so all diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mcp_template_core=info,mcp_template_bin=info,info"));

    fmt()
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(Commands::stdio_default) {
        Commands::Stdio { name, version } => {
            info!("Starting MCP server with stdio transport");
            mcp_template_core::run_stdio_server(ServerConfig::new(name, version))
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Fatal error in main"))
        }
        Commands::Test => mcp_template_core::test_handler().await,
        Commands::Show { command } => match command {
            ShowCommands::Tools { name } => {
                list_tools(&name);
                Ok(())
            }
            ShowCommands::Schema => {
                println!("{}", tools::registered_tools_json()?);
                Ok(())
            }
        },
    }
}

fn list_tools(name: &str) {
    for tool in tools::registered_tools() {
        println!("mcp__{}__{}", name, tool.name);
    }
}
