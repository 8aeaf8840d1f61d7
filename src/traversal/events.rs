//! Depth-first search as a stream of events.
//!
//! One iterative driver for every algorithm that needs more than the
//! visit order: it reports when a vertex is discovered, when an edge
//! leads back to an already discovered vertex, and when a vertex's
//! search finishes. Roots are taken lowest-index first and neighbours in
//! adjacency order, so the `Discover` sequence equals the visit order of
//! `GraphWalker::dfs`.
//!
//! The search keeps an explicit stack of `(vertex, adjacency cursor)`
//! frames, so arbitrarily deep graphs do not grow the call stack.

use crate::graph::{Graph, Vertex};

/// One step of a depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `vertex` is reached for the first time; `parent` is `None` for a root.
    Discover { vertex: Vertex, parent: Option<Vertex> },
    /// The edge `from -> to` leads to a vertex that was already discovered.
    NonTreeEdge { from: Vertex, to: Vertex },
    /// Every edge out of this vertex has been explored.
    Finish(Vertex),
}

/// Lazy depth-first search over the whole graph.
///
/// ```
/// use walkgraph::{DfsEvent, DfsEvents, Graph};
///
/// let mut g = Graph::directed(2);
/// g.add_edge(0, 1).unwrap();
/// let events: Vec<DfsEvent> = DfsEvents::new(&g).collect();
/// assert_eq!(events.last(), Some(&DfsEvent::Finish(0)));
/// ```
#[derive(Debug)]
pub struct DfsEvents<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    frames: Vec<(Vertex, usize)>,
    next_root: Vertex,
}

impl<'g> DfsEvents<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.v()],
            frames: Vec::new(),
            next_root: 0,
        }
    }

    fn discover(&mut self, vertex: Vertex, parent: Option<Vertex>) -> DfsEvent {
        self.visited[vertex] = true;
        self.frames.push((vertex, 0));
        DfsEvent::Discover { vertex, parent }
    }
}

impl Iterator for DfsEvents<'_> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<DfsEvent> {
        let graph = self.graph;
        let Some(frame) = self.frames.last_mut() else {
            while self.next_root < self.visited.len() && self.visited[self.next_root] {
                self.next_root += 1;
            }
            if self.next_root == self.visited.len() {
                return None;
            }
            let root = self.next_root;
            return Some(self.discover(root, None));
        };

        let (v, cursor) = *frame;
        let adj = graph.neighbors(v);
        if cursor == adj.len() {
            self.frames.pop();
            return Some(DfsEvent::Finish(v));
        }
        frame.1 += 1;

        let w = adj[cursor];
        if self.visited[w] {
            Some(DfsEvent::NonTreeEdge { from: v, to: w })
        } else {
            Some(self.discover(w, Some(v)))
        }
    }
}
