//! Resumable graph walkers.
//!
//! A walker is a value, not a loop: each call to `advance` yields the
//! next visited edge or a sentinel, and all frontier and visited state
//! lives in the walker between calls. Callers interleave their own
//! logic between steps and drop the walker to abandon a walk.
//!
//! Two orders (breadth-first, depth-first) and two scopes:
//!
//! - *subset* walkers ([`BfsWalker`], [`DfsWalker`]) cover only the
//!   vertices reachable from one source and end with [`Step::EndOfSubset`];
//! - the *whole-graph* walker ([`GraphWalker`]) chains subset walks from
//!   the lowest unvisited vertex and ends with [`Step::EndOfGraph`].
//!
//! Stepping past the end is idempotent: the same sentinel comes back.
//!
//! Algorithms that also need finish times or non-tree edges run on
//! [`DfsEvents`] instead.

pub mod bfs;
pub mod dfs;
pub mod events;
pub mod order;
pub mod whole;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Vertex};

pub use bfs::BfsWalker;
pub use dfs::DfsWalker;
pub use events::{DfsEvent, DfsEvents};
pub use order::DepthFirstOrder;
pub use whole::{GraphWalkState, GraphWalker};

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A newly visited vertex and the edge it was reached through.
    Visit(Edge),
    /// The current subset walk has no more vertices.
    EndOfSubset,
    /// Every vertex of the graph has been visited.
    EndOfGraph,
}

impl Step {
    /// The visited edge, if this step visited one.
    pub fn edge(self) -> Option<Edge> {
        match self {
            Step::Visit(edge) => Some(edge),
            Step::EndOfSubset | Step::EndOfGraph => None,
        }
    }

    pub fn is_end(&self) -> bool {
        !matches!(self, Step::Visit(_))
    }
}

/// A walk over the vertices reachable from one source.
pub trait SubsetWalk {
    /// Visit the next vertex, or report [`Step::EndOfSubset`].
    fn advance(&mut self) -> Step;

    /// Begin a new subset walk from `source`, keeping the visited set.
    ///
    /// Restarting from an already visited vertex yields an empty subset.
    fn restart(&mut self, source: Vertex) -> Result<()>;

    /// True once `v` has been visited by any subset walk of this walker.
    fn is_visited(&self, v: Vertex) -> bool;

    /// Number of vertices visited so far.
    fn visited_count(&self) -> usize;

    /// Number of vertices in the underlying graph.
    fn vertex_count(&self) -> usize;

    /// Capture the walker's state as plain data.
    fn snapshot(&self) -> WalkState;
}

/// Serializable state of a subset walker, taken between two steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkState {
    /// One flag per vertex.
    pub visited: Vec<bool>,
    /// Pending queue (BFS, front first) or stack (DFS, bottom first).
    pub frontier: Vec<Edge>,
    /// Vertices visited so far.
    pub count: usize,
}

impl WalkState {
    /// Check that this state can drive a walk over `graph`.
    pub(crate) fn validate(&self, graph: &Graph) -> Result<()> {
        if self.visited.len() != graph.v() {
            return Err(GraphError::SnapshotMismatch {
                expected: graph.v(),
                actual: self.visited.len(),
            });
        }
        for edge in &self.frontier {
            graph.check_vertex(edge.src)?;
            graph.check_vertex(edge.dst)?;
        }
        Ok(())
    }
}
