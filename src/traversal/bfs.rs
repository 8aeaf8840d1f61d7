//! Breadth-first subset walker.
//!
//! Neighbours of the dequeued vertex are enqueued in adjacency order and
//! marked at enqueue time, so the first edge that reaches a vertex is the
//! one reported. The reported edges form a shortest-hop spanning tree of
//! the source's subset.

use std::collections::VecDeque;

use super::{Step, SubsetWalk, WalkState};
use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};

/// Steppable BFS over the vertices reachable from a source.
#[derive(Debug, Clone)]
pub struct BfsWalker<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    queue: VecDeque<Edge>,
    count: usize,
}

impl<'g> BfsWalker<'g> {
    /// Walker whose first step visits `source` through `source -> source`.
    pub fn new(graph: &'g Graph, source: Vertex) -> Result<Self> {
        graph.check_vertex(source)?;
        let mut walker = Self::idle(graph);
        walker.discover(Edge::root(source));
        Ok(walker)
    }

    /// Walker with nothing queued; its first step is `EndOfSubset`.
    pub fn idle(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.v()],
            queue: VecDeque::new(),
            count: 0,
        }
    }

    /// Continue a walk captured with [`SubsetWalk::snapshot`].
    pub fn resume(graph: &'g Graph, state: WalkState) -> Result<Self> {
        state.validate(graph)?;
        Ok(Self {
            graph,
            visited: state.visited,
            queue: state.frontier.into(),
            count: state.count,
        })
    }

    fn discover(&mut self, edge: Edge) {
        self.visited[edge.dst] = true;
        self.queue.push_back(edge);
    }
}

impl SubsetWalk for BfsWalker<'_> {
    fn advance(&mut self) -> Step {
        let Some(edge) = self.queue.pop_front() else {
            return Step::EndOfSubset;
        };
        let graph = self.graph;
        for &w in graph.neighbors(edge.dst) {
            if !self.visited[w] {
                self.discover(Edge::new(edge.dst, w));
            }
        }
        self.count += 1;
        Step::Visit(edge)
    }

    fn restart(&mut self, source: Vertex) -> Result<()> {
        self.graph.check_vertex(source)?;
        if !self.visited[source] {
            self.discover(Edge::root(source));
        }
        Ok(())
    }

    fn is_visited(&self, v: Vertex) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }

    fn visited_count(&self) -> usize {
        self.count
    }

    fn vertex_count(&self) -> usize {
        self.graph.v()
    }

    fn snapshot(&self) -> WalkState {
        WalkState {
            visited: self.visited.clone(),
            frontier: self.queue.iter().copied().collect(),
            count: self.count,
        }
    }
}

impl Iterator for BfsWalker<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.advance().edge()
    }
}
