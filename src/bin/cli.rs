//! walkgraph CLI - resumable graph walks and classic graph algorithms.
//!
//! Usage:
//!   walkgraph stats <file> [--directed]          # Degree statistics
//!   walkgraph walk <file> [--order dfs]          # Whole-graph or subset walk
//!   walkgraph components <file>                  # Connected components
//!   walkgraph cycle <file>                       # First directed cycle
//!   walkgraph topo <file> [--symbols]            # Topological order
//!   walkgraph path <file> <source> <dest>...     # Degrees of separation
//!   walkgraph adj <file> <name>                  # Named neighbours

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use walkgraph::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.loader_config()?;

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let output = commands::execute(&cli.command, &config)?;
    println!("{}", output);
    Ok(())
}
