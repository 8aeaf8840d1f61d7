//! # walkgraph
//!
//! Vertex-indexed graphs with resumable walkers.
//!
//! A walker is a steppable value: each `advance` yields the next visited
//! edge or an end sentinel, and its visited set and frontier persist
//! between calls. The classic algorithms are built by driving walkers.
//!
//! ## Key Features
//!
//! - **Steppable**: BFS and DFS walkers, per-source or over the whole graph
//! - **Resumable**: walker state snapshots to plain serde data
//! - **Iterative**: no recursion anywhere, depth is bounded by the heap
//! - **Named vertices**: symbol graphs map strings to vertex indices
//!
//! ## Quick Start
//!
//! ```rust
//! use walkgraph::{ConnectedComponents, Graph, GraphWalker, Step};
//!
//! let mut graph = Graph::undirected(4);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(2, 3)?;
//!
//! // Step a whole-graph walk by hand
//! let mut walker = GraphWalker::bfs(&graph);
//! while let Step::Visit(edge) = walker.advance() {
//!     println!("{edge}");
//! }
//!
//! let cc = ConnectedComponents::new(&graph)?;
//! assert_eq!(cc.count(), 2);
//! # Ok::<(), walkgraph::GraphError>(())
//! ```

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod symbol;
pub mod traversal;

// Re-exports for convenience
pub use error::{GraphError, Result};

pub use algorithms::{
    topological_order, ConnectedComponents, DirectedCycle, SingleSourcePaths, Topological,
};
pub use config::LoaderConfig;
pub use graph::{Edge, Graph, GraphKind, GraphStats, Vertex};
pub use symbol::SymbolGraph;
pub use traversal::{
    BfsWalker, DepthFirstOrder, DfsEvent, DfsEvents, DfsWalker, GraphWalkState, GraphWalker, Step,
    SubsetWalk, WalkState,
};
