//! Whole-graph walker.
//!
//! Chains subset walks so every vertex is visited exactly once, including
//! vertices in other components or unreachable in a digraph. When the
//! current subset ends, the next walk starts at the lowest-indexed
//! unvisited vertex. `EndOfSubset` never escapes; the caller only ever
//! sees `EndOfGraph`, once every vertex has been visited.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{BfsWalker, DfsWalker, Step, SubsetWalk, WalkState};
use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};

/// Steppable walk over every vertex of a graph.
#[derive(Debug, Clone)]
pub struct GraphWalker<W> {
    walker: W,
    /// No vertex below this index is unvisited.
    next_root: Vertex,
    /// Subset walks started so far.
    subsets: usize,
    done: bool,
}

/// Serializable state of a [`GraphWalker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphWalkState {
    pub walk: WalkState,
    pub next_root: Vertex,
    pub subsets: usize,
    pub done: bool,
}

impl<'g> GraphWalker<BfsWalker<'g>> {
    /// Breadth-first walk over the whole graph.
    pub fn bfs(graph: &'g Graph) -> Self {
        Self::chain(BfsWalker::idle(graph))
    }

    pub fn resume_bfs(graph: &'g Graph, state: GraphWalkState) -> Result<Self> {
        let walker = BfsWalker::resume(graph, state.walk)?;
        Ok(Self::restore(walker, state.next_root, state.subsets, state.done))
    }
}

impl<'g> GraphWalker<DfsWalker<'g>> {
    /// Depth-first walk over the whole graph.
    pub fn dfs(graph: &'g Graph) -> Self {
        Self::chain(DfsWalker::idle(graph))
    }

    pub fn resume_dfs(graph: &'g Graph, state: GraphWalkState) -> Result<Self> {
        let walker = DfsWalker::resume(graph, state.walk)?;
        Ok(Self::restore(walker, state.next_root, state.subsets, state.done))
    }
}

impl<W: SubsetWalk> GraphWalker<W> {
    /// Chain subset walks of `walker`, starting once its current subset ends.
    pub fn chain(walker: W) -> Self {
        Self::restore(walker, 0, 0, false)
    }

    fn restore(walker: W, next_root: Vertex, subsets: usize, done: bool) -> Self {
        Self {
            walker,
            next_root,
            subsets,
            done,
        }
    }

    /// Visit the next vertex, or report [`Step::EndOfGraph`].
    pub fn advance(&mut self) -> Step {
        if self.done {
            return Step::EndOfGraph;
        }
        loop {
            if let Step::Visit(edge) = self.walker.advance() {
                return Step::Visit(edge);
            }

            let count = self.walker.vertex_count();
            while self.next_root < count && self.walker.is_visited(self.next_root) {
                self.next_root += 1;
            }
            if self.next_root == count || self.walker.restart(self.next_root).is_err() {
                self.done = true;
                return Step::EndOfGraph;
            }
            self.subsets += 1;
            trace!(root = self.next_root, subset = self.subsets, "starting subset walk");
        }
    }

    pub fn is_visited(&self, v: Vertex) -> bool {
        self.walker.is_visited(v)
    }

    pub fn visited_count(&self) -> usize {
        self.walker.visited_count()
    }

    /// Subset walks started by this walker so far.
    ///
    /// Subsets seeded before chaining (e.g. via [`GraphWalker::chain`] on a
    /// walker that already has a source) are not counted.
    pub fn subsets(&self) -> usize {
        self.subsets
    }

    pub fn snapshot(&self) -> GraphWalkState {
        GraphWalkState {
            walk: self.walker.snapshot(),
            next_root: self.next_root,
            subsets: self.subsets,
            done: self.done,
        }
    }
}

impl<W: SubsetWalk> Iterator for GraphWalker<W> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.advance().edge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three components: {0,1,2}, {3,4}, {5}.
    fn forest() -> Graph {
        let mut g = Graph::undirected(6);
        for (v, w) in [(0, 1), (1, 2), (4, 3)] {
            g.add_edge(v, w).unwrap();
        }
        g
    }

    #[test]
    fn test_bfs_whole_graph() {
        let g = forest();
        let edges: Vec<Edge> = GraphWalker::bfs(&g).collect();
        assert_eq!(
            edges,
            vec![
                Edge::root(0),
                Edge::new(0, 1),
                Edge::new(1, 2),
                Edge::root(3),
                Edge::new(3, 4),
                Edge::root(5),
            ]
        );
    }

    #[test]
    fn test_dfs_whole_graph_visits_all_once() {
        let g = forest();
        let mut walker = GraphWalker::dfs(&g);
        let mut seen = vec![0usize; g.v()];
        while let Step::Visit(edge) = walker.advance() {
            seen[edge.dst] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(walker.subsets(), 3);
        assert_eq!(walker.visited_count(), 6);
    }

    #[test]
    fn test_end_of_subset_is_swallowed() {
        let g = forest();
        let mut walker = GraphWalker::bfs(&g);
        for _ in 0..6 {
            assert!(matches!(walker.advance(), Step::Visit(_)));
        }
        assert_eq!(walker.advance(), Step::EndOfGraph);
        assert_eq!(walker.advance(), Step::EndOfGraph);
    }

    #[test]
    fn test_digraph_no_revisit() {
        // 2 -> 0 -> 1: the walk from 0 misses 2, the walk from 2 must not revisit 0
        let mut g = Graph::directed(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(2, 0).unwrap();

        let edges: Vec<Edge> = GraphWalker::dfs(&g).collect();
        assert_eq!(edges, vec![Edge::root(0), Edge::new(0, 1), Edge::root(2)]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::directed(0);
        let mut walker = GraphWalker::bfs(&g);
        assert_eq!(walker.advance(), Step::EndOfGraph);
        assert_eq!(walker.subsets(), 0);
    }

    #[test]
    fn test_chain_seeded_walker() {
        let g = forest();
        let seeded = BfsWalker::new(&g, 4).unwrap();
        let order: Vec<Vertex> = GraphWalker::chain(seeded).map(|e| e.dst).collect();
        assert_eq!(order, vec![4, 3, 0, 1, 2, 5]);
    }

    #[test]
    fn test_snapshot_resume_mid_walk() {
        let g = forest();
        let mut walker = GraphWalker::dfs(&g);
        for _ in 0..4 {
            walker.advance();
        }
        let json = serde_json::to_string(&walker.snapshot()).unwrap();
        let state: GraphWalkState = serde_json::from_str(&json).unwrap();
        let resumed = GraphWalker::resume_dfs(&g, state).unwrap();

        let rest: Vec<Edge> = walker.collect();
        assert_eq!(rest, resumed.collect::<Vec<_>>());
        assert_eq!(rest, vec![Edge::new(3, 4), Edge::root(5)]);
    }
}
