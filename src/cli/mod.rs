//! CLI module for walkgraph.
//!
//! Commands:
//! - Numeric graphs: stats, walk, components, cycle, topo
//! - Symbol graphs: path, adj (and `topo --symbols`)

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::graph::GraphKind;

#[derive(Debug, Parser)]
#[command(name = "walkgraph")]
#[command(about = "Resumable graph walks and the classic algorithms built on them")]
pub struct Cli {
    /// Loader config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Field separator for symbol graph records (overrides config)
    #[arg(short, long, global = true)]
    pub separator: Option<String>,

    /// Fail on malformed or out-of-range records instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Traversal order for `walk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WalkOrder {
    Bfs,
    Dfs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    // ─── Numeric graphs ───────────────────────────────────────────
    /// Vertex/edge counts and degree statistics
    Stats {
        /// Numeric edge-list file
        file: PathBuf,

        /// Load as a digraph
        #[arg(short, long)]
        directed: bool,
    },

    /// Print the visited edges of a BFS or DFS walk
    Walk {
        /// Numeric edge-list file
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "bfs")]
        order: WalkOrder,

        /// Load as a digraph
        #[arg(short, long)]
        directed: bool,

        /// Walk only what this vertex reaches (default: whole graph)
        #[arg(long)]
        source: Option<usize>,
    },

    /// Connected components of an undirected graph
    Components {
        /// Numeric edge-list file
        file: PathBuf,
    },

    /// First directed cycle of a digraph, if any
    Cycle {
        /// Numeric edge-list file
        file: PathBuf,
    },

    /// Topological order of a DAG
    Topo {
        /// Numeric edge-list file, or symbol digraph with --symbols
        file: PathBuf,

        /// Read the file as a symbol digraph and print names
        #[arg(long)]
        symbols: bool,
    },

    // ─── Symbol graphs ────────────────────────────────────────────
    /// Shortest paths by name (degrees of separation)
    Path {
        /// Symbol graph file
        file: PathBuf,

        /// Source name
        source: String,

        /// Destination names
        #[arg(required = true)]
        dests: Vec<String>,

        /// Load as a symbol digraph
        #[arg(short, long)]
        directed: bool,
    },

    /// Neighbours of a named vertex
    Adj {
        /// Symbol graph file
        file: PathBuf,

        /// Vertex name
        name: String,

        /// Load as a symbol digraph
        #[arg(short, long)]
        directed: bool,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.config {
            Some(path) => LoaderConfig::load(path)?,
            None => LoaderConfig::default(),
        };
        if let Some(separator) = &self.separator {
            config = config.with_separator(separator.clone());
        }
        if self.strict {
            config = config.with_strict(true);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Graph kind selected by a `--directed` flag.
pub(crate) fn kind_for(directed: bool) -> GraphKind {
    if directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_walk() {
        let cli = Cli::try_parse_from(["walkgraph", "walk", "g.txt", "--order", "dfs", "--source", "3"])
            .unwrap();
        match cli.command {
            Commands::Walk {
                order,
                source,
                directed,
                ..
            } => {
                assert_eq!(order, WalkOrder::Dfs);
                assert_eq!(source, Some(3));
                assert!(!directed);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["walkgraph", "adj", "routes.txt", "JFK", "-s", "/", "--strict"])
            .unwrap();
        let config = cli.loader_config().unwrap();
        assert_eq!(config.separator, "/");
        assert!(config.strict);
    }

    #[test]
    fn test_path_requires_destination() {
        assert!(Cli::try_parse_from(["walkgraph", "path", "routes.txt", "JFK"]).is_err());
    }

    #[test]
    fn test_config_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walkgraph.toml");
        std::fs::write(&path, "separator = \",\"\ncomment = \"%\"\n").unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let path_arg = path_arg.as_str();
        let cli = Cli::try_parse_from(["walkgraph", "--config", path_arg, "stats", "g.txt"]).unwrap();
        let config = cli.loader_config().unwrap();
        assert_eq!(config.separator, ",");
        assert_eq!(config.comment, '%');

        let cli = Cli::try_parse_from(["walkgraph", "--config", path_arg, "-s", ";", "stats", "g.txt"])
            .unwrap();
        assert_eq!(cli.loader_config().unwrap().separator, ";");
    }

    #[test]
    fn test_empty_separator_flag_rejected() {
        let cli = Cli::try_parse_from(["walkgraph", "adj", "routes.txt", "JFK", "-s", ""]).unwrap();
        assert!(matches!(
            cli.loader_config(),
            Err(crate::error::GraphError::Config(_))
        ));
    }

    #[test]
    fn test_kind_for() {
        assert_eq!(kind_for(true), GraphKind::Directed);
        assert_eq!(kind_for(false), GraphKind::Undirected);
    }
}
