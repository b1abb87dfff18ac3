use std::process;

use anyhow::Result;
use clap::{ArgMatches, Command};

const BIN_CRATE: &str = "crates/mcp-template-bin";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("install").about("Install the mcp-server-template binary"))
        .subcommand(Command::new("schema").about("Print the advertised tool schemas"))
        .get_matches();

    match args.subcommand() {
        Some(("install", args)) => handle_install_command(args),
        Some(("schema", args)) => handle_schema_command(args),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn handle_install_command(_args: &ArgMatches) -> Result<()> {
    run_cargo(&["install", "--path", BIN_CRATE])
}

fn handle_schema_command(_args: &ArgMatches) -> Result<()> {
    run_cargo(&["run", "--quiet", "-p", "mcp-template-bin", "--", "show", "schema"])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let status = process::Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed with {}", args.join(" "), status);
    }
    Ok(())
}
