//! Core types for vertex-indexed graphs.
//!
//! Defines the vertex identifier, the edge pair yielded by walkers,
//! the graph flavour, and summary statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex identifier in `[0, V)`. Identity is positional.
pub type Vertex = usize;

/// Whether edges are one-way or two-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// `add_edge(v, w)` inserts `w` into `v`'s list and `v` into `w`'s list.
    Undirected,
    /// `add_edge(v, w)` inserts `w` into `v`'s list only.
    Directed,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Directed => write!(f, "directed"),
        }
    }
}

/// A `(parent, child)` pair produced by a walk.
///
/// The first edge of every subset walk is the self-edge `source -> source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: Vertex,
    pub dst: Vertex,
}

impl Edge {
    pub fn new(src: Vertex, dst: Vertex) -> Self {
        Self { src, dst }
    }

    /// The self-edge that opens a walk rooted at `v`.
    pub fn root(v: Vertex) -> Self {
        Self { src: v, dst: v }
    }

    pub fn is_root(&self) -> bool {
        self.src == self.dst
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.src, self.dst)
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    pub kind: GraphKind,
    pub vertices: usize,
    pub edges: usize,
    pub average_degree: f64,
    pub max_degree: usize,
    pub self_loops: usize,
}
