//! Topological order of a directed acyclic graph.
//!
//! The digraph is first checked for a cycle; a cyclic digraph has no
//! order and the witnessed cycle is returned in the error. Otherwise the
//! order is the reverse of the depth-first finish order.

use tracing::debug;

use super::DirectedCycle;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex};
use crate::traversal::DepthFirstOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topological {
    order: Vec<Vertex>,
    /// Position of each vertex in `order`.
    rank: Vec<usize>,
}

impl Topological {
    pub fn new(graph: &Graph) -> Result<Self> {
        let finder = DirectedCycle::new(graph)?;
        if !finder.is_acyclic() {
            return Err(GraphError::Cyclic {
                cycle: finder.into_cycle(),
            });
        }

        let order = DepthFirstOrder::new(graph).reverse_post();
        let mut rank = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            rank[v] = i;
        }
        debug!(vertices = order.len(), "computed topological order");
        Ok(Self { order, rank })
    }

    /// Every vertex exactly once; each edge `v -> w` has `v` before `w`.
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    /// Position of `v` in the order.
    pub fn rank(&self, v: Vertex) -> Result<usize> {
        self.rank
            .get(v)
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.rank.len(),
            })
    }

    pub fn into_order(self) -> Vec<Vertex> {
        self.order
    }
}

/// Topological order of `graph`, or [`GraphError::Cyclic`] with a witness.
pub fn topological_order(graph: &Graph) -> Result<Vec<Vertex>> {
    Topological::new(graph).map(Topological::into_order)
}
