//! The adjacency-list graph store.
//!
//! Vertices are positions in `[0, V)`, fixed at construction. Edges are
//! only ever appended; adjacency order equals insertion order so every
//! traversal over the same graph is deterministic.

use std::collections::TryReserveError;
use tracing::debug;

use super::types::{Edge, GraphKind, GraphStats, Vertex};
use crate::error::{GraphError, Result};

/// A directed or undirected graph over vertices `0..V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    kind: GraphKind,
    /// One neighbour list per vertex, in edge-insertion order.
    adj: Vec<Vec<Vertex>>,
    /// Incremented once per `add_edge`, regardless of direction.
    edges: usize,
}

impl Graph {
    /// Create a graph of the given kind with `vertices` isolated vertices.
    pub fn with_kind(kind: GraphKind, vertices: usize) -> Self {
        Self {
            kind,
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    /// Like [`Graph::with_kind`], but reports an allocation failure for
    /// the vertex table instead of aborting.
    pub fn try_with_kind(
        kind: GraphKind,
        vertices: usize,
    ) -> std::result::Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(vertices)?;
        adj.resize_with(vertices, Vec::new);
        Ok(Self { kind, adj, edges: 0 })
    }

    /// Create an undirected graph with `vertices` isolated vertices.
    pub fn undirected(vertices: usize) -> Self {
        Self::with_kind(GraphKind::Undirected, vertices)
    }

    /// Create a directed graph with `vertices` isolated vertices.
    pub fn directed(vertices: usize) -> Self {
        Self::with_kind(GraphKind::Directed, vertices)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Number of vertices.
    pub fn v(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn e(&self) -> usize {
        self.edges
    }

    /// Fail unless `v` is a vertex of this graph.
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v >= self.adj.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.adj.len(),
            });
        }
        Ok(())
    }

    /// Neighbours of `v` in insertion order.
    pub fn adj(&self, v: Vertex) -> Result<&[Vertex]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Unchecked neighbour access for walkers that validated `v` already.
    pub(crate) fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Add the edge `v -> w` (and `w -> v` for undirected graphs).
    ///
    /// Duplicate edges and self-loops are kept as given. Out-of-range
    /// endpoints leave the graph untouched.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        self.adj[v].push(w);
        if self.kind == GraphKind::Undirected {
            self.adj[w].push(v);
        }
        self.edges += 1;
        Ok(())
    }

    /// A new digraph with every edge flipped.
    ///
    /// For an undirected graph every edge is its own reverse, so this is a copy.
    pub fn reverse(&self) -> Graph {
        if self.kind == GraphKind::Undirected {
            return self.clone();
        }
        let mut rev = Graph::directed(self.v());
        for (v, list) in self.adj.iter().enumerate() {
            for &w in list {
                rev.adj[w].push(v);
            }
        }
        rev.edges = self.edges;
        debug!(vertices = rev.v(), edges = rev.e(), "reversed digraph");
        rev
    }

    /// Every edge once, in adjacency order.
    ///
    /// Undirected edges are reported from their lower endpoint only
    /// (`v <= w`); the two list entries of an undirected self-loop
    /// collapse into one edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.is_directed();
        self.adj.iter().enumerate().flat_map(move |(v, list)| {
            let mut loops_seen = 0usize;
            list.iter().copied().filter_map(move |w| {
                if directed || v < w {
                    return Some(Edge::new(v, w));
                }
                if v == w {
                    loops_seen += 1;
                    if loops_seen % 2 == 1 {
                        return Some(Edge::new(v, w));
                    }
                }
                None
            })
        })
    }

    // ─── Degrees ────────────────────────────────────────────────

    /// Length of `v`'s adjacency list.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    /// `2E / V`, or `0.0` for an empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.adj.is_empty() {
            return 0.0;
        }
        2.0 * self.edges as f64 / self.adj.len() as f64
    }

    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn self_loops(&self) -> usize {
        let loops: usize = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, list)| list.iter().filter(|&&w| w == v).count())
            .sum();
        match self.kind {
            // each undirected self-loop is stored twice
            GraphKind::Undirected => loops / 2,
            GraphKind::Directed => loops,
        }
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            kind: self.kind,
            vertices: self.v(),
            edges: self.e(),
            average_degree: self.average_degree(),
            max_degree: self.max_degree(),
            self_loops: self.self_loops(),
        }
    }

    /// Same kind, `V`, `E`, and per-vertex adjacency multisets.
    ///
    /// Adjacency order is ignored.
    pub fn same_structure(&self, other: &Graph) -> bool {
        if self.kind != other.kind || self.v() != other.v() || self.e() != other.e() {
            return false;
        }
        self.adj.iter().zip(&other.adj).all(|(x, y)| {
            if x.len() != y.len() {
                return false;
            }
            let mut x = x.clone();
            let mut y = y.clone();
            x.sort_unstable();
            y.sort_unstable();
            x == y
        })
    }
}
