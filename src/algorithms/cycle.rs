//! Directed cycle detection.
//!
//! Depth-first search with three per-vertex markers: visited, on the
//! current path, and parent in the DFS tree. Reaching a vertex that is
//! still on the current path closes a cycle, which is rebuilt from the
//! parent pointers.
//!
//! The search runs on [`DfsEvents`] and stops entirely at the first
//! cycle: no further roots are explored, and the reported cycle is the
//! first one this search order meets.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Vertex};
use crate::traversal::{DfsEvent, DfsEvents};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCycle {
    /// Closed walk `[w, ..., v, w]`, empty when acyclic.
    cycle: Vec<Vertex>,
}

impl DirectedCycle {
    pub fn new(graph: &Graph) -> Result<Self> {
        if graph.kind() != GraphKind::Directed {
            return Err(GraphError::KindMismatch {
                expected: GraphKind::Directed,
                actual: graph.kind(),
            });
        }

        let n = graph.v();
        let mut on_path = vec![false; n];
        let mut edge_to: Vec<Vertex> = (0..n).collect();
        let mut cycle = Vec::new();

        for event in DfsEvents::new(graph) {
            match event {
                DfsEvent::Discover { vertex, parent } => {
                    if let Some(parent) = parent {
                        edge_to[vertex] = parent;
                    }
                    on_path[vertex] = true;
                }
                DfsEvent::Finish(vertex) => on_path[vertex] = false,
                DfsEvent::NonTreeEdge { from, to } if on_path[to] => {
                    cycle = trace_cycle(&edge_to, from, to);
                    break;
                }
                DfsEvent::NonTreeEdge { .. } => {}
            }
        }

        if !cycle.is_empty() {
            debug!(len = cycle.len() - 1, "found directed cycle");
        }
        Ok(Self { cycle })
    }

    pub fn is_acyclic(&self) -> bool {
        self.cycle.is_empty()
    }

    /// The cycle found, as a closed walk `[w, ..., v, w]`; empty if acyclic.
    pub fn cycle(&self) -> &[Vertex] {
        &self.cycle
    }

    pub fn into_cycle(self) -> Vec<Vertex> {
        self.cycle
    }
}

/// Rebuild `w -> ... -> v -> w` from the tree path `w ~> v` and back edge `v -> w`.
fn trace_cycle(edge_to: &[Vertex], v: Vertex, w: Vertex) -> Vec<Vertex> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        x = edge_to[x];
    }
    cycle.push(w);
    cycle.reverse();
    cycle.push(w);
    cycle
}
