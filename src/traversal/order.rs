//! Depth-first vertex orders over a whole graph.
//!
//! Preorder, postorder (finish order) and reverse postorder, read off the
//! discover and finish events of [`DfsEvents`]. Roots are taken
//! lowest-index first, the same chaining rule the whole-graph walker
//! uses, so `pre()` matches the visit order of `GraphWalker::dfs`.

use super::events::{DfsEvent, DfsEvents};
use crate::graph::{Graph, Vertex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Vec<Vertex>,
    post: Vec<Vertex>,
}

impl DepthFirstOrder {
    pub fn new(graph: &Graph) -> Self {
        let mut pre = Vec::with_capacity(graph.v());
        let mut post = Vec::with_capacity(graph.v());
        for event in DfsEvents::new(graph) {
            match event {
                DfsEvent::Discover { vertex, .. } => pre.push(vertex),
                DfsEvent::Finish(vertex) => post.push(vertex),
                DfsEvent::NonTreeEdge { .. } => {}
            }
        }
        Self { pre, post }
    }

    /// Vertices in the order they were first reached.
    pub fn pre(&self) -> &[Vertex] {
        &self.pre
    }

    /// Vertices in the order their search finished.
    pub fn post(&self) -> &[Vertex] {
        &self.post
    }

    /// Postorder reversed; a topological order when the graph is a DAG.
    pub fn reverse_post(&self) -> Vec<Vertex> {
        self.post.iter().rev().copied().collect()
    }
}
