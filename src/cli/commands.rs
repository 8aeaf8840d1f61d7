//! Command handlers for the walkgraph binary.
//!
//! Each handler loads its input, runs one query and returns the rendered
//! JSON, leaving printing to the caller.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use super::{kind_for, Commands, WalkOrder};
use crate::algorithms::{topological_order, ConnectedComponents, DirectedCycle, SingleSourcePaths};
use crate::config::LoaderConfig;
use crate::graph::{builder, Edge, Graph, GraphKind, Vertex};
use crate::symbol::SymbolGraph;
use crate::traversal::{BfsWalker, DfsWalker, GraphWalker};

#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub order: &'static str,
    pub source: Option<Vertex>,
    pub subsets: usize,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub components: Vec<Vec<Vertex>>,
}

#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub acyclic: bool,
    pub cycle: Vec<Vertex>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub dest: String,
    /// False when the name does not appear in the graph.
    pub known: bool,
    pub hops: Option<usize>,
    pub path: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AdjReport {
    pub name: String,
    pub neighbours: Vec<String>,
}

/// Run `command` and return its JSON output.
pub fn execute(command: &Commands, config: &LoaderConfig) -> Result<String> {
    match command {
        Commands::Stats { file, directed } => stats(file, kind_for(*directed), config),
        Commands::Walk {
            file,
            order,
            directed,
            source,
        } => walk(file, kind_for(*directed), *order, *source, config),
        Commands::Components { file } => components(file, config),
        Commands::Cycle { file } => cycle(file, config),
        Commands::Topo { file, symbols } => topo(file, *symbols, config),
        Commands::Path {
            file,
            source,
            dests,
            directed,
        } => path(file, kind_for(*directed), source, dests, config),
        Commands::Adj {
            file,
            name,
            directed,
        } => adj(file, kind_for(*directed), name, config),
    }
}

fn load_graph(file: &Path, kind: GraphKind, config: &LoaderConfig) -> Result<Graph> {
    builder::from_file(kind, file, config)
        .with_context(|| format!("failed to load graph from {}", file.display()))
}

fn load_symbols(file: &Path, kind: GraphKind, config: &LoaderConfig) -> Result<SymbolGraph> {
    SymbolGraph::from_file(kind, file, config)
        .with_context(|| format!("failed to load symbol graph from {}", file.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to render JSON")
}

// ─── Numeric graphs ───────────────────────────────────────────────

pub fn stats(file: &Path, kind: GraphKind, config: &LoaderConfig) -> Result<String> {
    let graph = load_graph(file, kind, config)?;
    to_json(&graph.stats())
}

pub fn walk(
    file: &Path,
    kind: GraphKind,
    order: WalkOrder,
    source: Option<Vertex>,
    config: &LoaderConfig,
) -> Result<String> {
    let graph = load_graph(file, kind, config)?;

    let (edges, subsets): (Vec<Edge>, usize) = match (order, source) {
        (WalkOrder::Bfs, Some(s)) => (BfsWalker::new(&graph, s)?.collect(), 1),
        (WalkOrder::Dfs, Some(s)) => (DfsWalker::new(&graph, s)?.collect(), 1),
        (WalkOrder::Bfs, None) => {
            let mut walker = GraphWalker::bfs(&graph);
            let edges: Vec<Edge> = walker.by_ref().collect();
            (edges, walker.subsets())
        }
        (WalkOrder::Dfs, None) => {
            let mut walker = GraphWalker::dfs(&graph);
            let edges: Vec<Edge> = walker.by_ref().collect();
            (edges, walker.subsets())
        }
    };
    debug!(visited = edges.len(), subsets, "walk finished");

    to_json(&WalkReport {
        order: match order {
            WalkOrder::Bfs => "bfs",
            WalkOrder::Dfs => "dfs",
        },
        source,
        subsets,
        edges,
    })
}

pub fn components(file: &Path, config: &LoaderConfig) -> Result<String> {
    let graph = load_graph(file, GraphKind::Undirected, config)?;
    let cc = ConnectedComponents::new(&graph)?;
    to_json(&ComponentsReport {
        count: cc.count(),
        components: cc.components(),
    })
}

pub fn cycle(file: &Path, config: &LoaderConfig) -> Result<String> {
    let graph = load_graph(file, GraphKind::Directed, config)?;
    let finder = DirectedCycle::new(&graph)?;
    to_json(&CycleReport {
        acyclic: finder.is_acyclic(),
        cycle: finder.into_cycle(),
    })
}

pub fn topo(file: &Path, symbols: bool, config: &LoaderConfig) -> Result<String> {
    if !symbols {
        let graph = load_graph(file, GraphKind::Directed, config)?;
        return to_json(&topological_order(&graph)?);
    }
    let sg = load_symbols(file, GraphKind::Directed, config)?;
    let order = topological_order(sg.graph())?;
    to_json(&sg.names(&order)?)
}

// ─── Symbol graphs ────────────────────────────────────────────────

pub fn path(
    file: &Path,
    kind: GraphKind,
    source: &str,
    dests: &[String],
    config: &LoaderConfig,
) -> Result<String> {
    let sg = load_symbols(file, kind, config)?;
    let start = sg.index(source)?;
    let paths = SingleSourcePaths::breadth_first(sg.graph(), start)?;

    let mut reports = Vec::with_capacity(dests.len());
    for dest in dests {
        let Ok(v) = sg.index(dest) else {
            warn!(name = %dest, "not in graph");
            reports.push(PathReport {
                dest: dest.clone(),
                known: false,
                hops: None,
                path: Vec::new(),
            });
            continue;
        };
        let report = if paths.path_exists(v) {
            let path = paths.path_to(v)?;
            PathReport {
                dest: dest.clone(),
                known: true,
                hops: Some(path.len() - 1),
                path: sg.names(&path)?.into_iter().map(str::to_string).collect(),
            }
        } else {
            PathReport {
                dest: dest.clone(),
                known: true,
                hops: None,
                path: Vec::new(),
            }
        };
        reports.push(report);
    }
    to_json(&reports)
}

pub fn adj(file: &Path, kind: GraphKind, name: &str, config: &LoaderConfig) -> Result<String> {
    let sg = load_symbols(file, kind, config)?;
    let v = sg.index(name)?;
    let neighbours = sg
        .names(sg.graph().adj(v)?)?
        .into_iter()
        .map(str::to_string)
        .collect();
    to_json(&AdjReport {
        name: name.to_string(),
        neighbours,
    })
}
