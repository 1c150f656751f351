use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use roster_mcp::config::{load_config, resolve_roster, ServerConfig};
use roster_mcp::mcp::McpServer;
use roster_mcp::roster::Roster;

/// MCP server exposing a read-only student roster over stdio.
#[derive(Parser)]
#[command(name = "roster-mcp", version, about = "MCP server for a student roster")]
struct Cli {
    /// JSON configuration file (server identity, roster path)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON roster file; overrides `roster_path` from the config
    #[arg(short, long)]
    roster: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let (config, roster) = match setup(cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let server = McpServer::new(&roster, config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    // Transport failures are already logged by the server loop.
    if server.run(stdin.lock(), stdout.lock()).is_err() {
        process::exit(1);
    }
}

/// Logs go to stderr; stdout carries only protocol responses.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Loads the configuration and the roster it points at.
fn setup(cli: Cli) -> roster_mcp::errors::Result<(ServerConfig, Roster)> {
    let config = load_config(cli.config.as_deref())?;
    let roster = resolve_roster(cli.roster.as_deref(), &config)?;
    Ok((config, roster))
}
