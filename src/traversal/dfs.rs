//! Depth-first subset walker.
//!
//! Iterative: one discovery stack of candidate edges. A popped vertex
//! pushes all of its neighbours, visited or not, and the visited check
//! happens when an entry is popped. Neighbours go on in reverse adjacency
//! order so the first neighbour is explored first, which makes the visit
//! order the same preorder a recursive DFS would produce. Depth is bounded
//! by the heap, not the call stack.

use super::{Step, SubsetWalk, WalkState};
use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};

/// Steppable DFS over the vertices reachable from a source.
#[derive(Debug, Clone)]
pub struct DfsWalker<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    stack: Vec<Edge>,
    count: usize,
}

impl<'g> DfsWalker<'g> {
    /// Walker whose first step visits `source` through `source -> source`.
    pub fn new(graph: &'g Graph, source: Vertex) -> Result<Self> {
        graph.check_vertex(source)?;
        let mut walker = Self::idle(graph);
        walker.stack.push(Edge::root(source));
        Ok(walker)
    }

    /// Walker with nothing stacked; its first step is `EndOfSubset`.
    pub fn idle(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.v()],
            stack: Vec::new(),
            count: 0,
        }
    }

    /// Continue a walk captured with [`SubsetWalk::snapshot`].
    pub fn resume(graph: &'g Graph, state: WalkState) -> Result<Self> {
        state.validate(graph)?;
        Ok(Self {
            graph,
            visited: state.visited,
            stack: state.frontier,
            count: state.count,
        })
    }
}

impl SubsetWalk for DfsWalker<'_> {
    fn advance(&mut self) -> Step {
        while let Some(edge) = self.stack.pop() {
            if self.visited[edge.dst] {
                continue;
            }
            self.visited[edge.dst] = true;
            self.count += 1;

            let graph = self.graph;
            self.stack.extend(
                graph
                    .neighbors(edge.dst)
                    .iter()
                    .rev()
                    .map(|&w| Edge::new(edge.dst, w)),
            );
            return Step::Visit(edge);
        }
        Step::EndOfSubset
    }

    fn restart(&mut self, source: Vertex) -> Result<()> {
        self.graph.check_vertex(source)?;
        self.stack.push(Edge::root(source));
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
            frontier: self.stack.clone(),
            count: self.count,
        }
    }
}

impl Iterator for DfsWalker<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.advance().edge()
    }
}
