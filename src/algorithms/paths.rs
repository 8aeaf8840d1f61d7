//! Single-source paths.
//!
//! Replays a subset walk from the source and records, for every vertex
//! it reaches, the edge it was reached through. Built on the breadth-first
//! walker the paths are shortest in hop count; on the depth-first walker
//! they are the DFS tree paths.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Vertex};
use crate::traversal::{BfsWalker, DfsWalker, Step, SubsetWalk};

#[derive(Debug, Clone)]
pub struct SingleSourcePaths {
    source: Vertex,
    /// Predecessor on the path from `source`; `None` for the source and unreached vertices.
    edge_to: Vec<Option<Vertex>>,
    /// Hop count from `source`; `None` when unreached.
    dist: Vec<Option<usize>>,
}

impl SingleSourcePaths {
    /// Shortest (fewest-edge) paths from `source`.
    pub fn breadth_first(graph: &Graph, source: Vertex) -> Result<Self> {
        let walker = BfsWalker::new(graph, source)?;
        Ok(Self::record(graph, source, walker))
    }

    /// Depth-first tree paths from `source`.
    pub fn depth_first(graph: &Graph, source: Vertex) -> Result<Self> {
        let walker = DfsWalker::new(graph, source)?;
        Ok(Self::record(graph, source, walker))
    }

    fn record<W: SubsetWalk>(graph: &Graph, source: Vertex, mut walker: W) -> Self {
        let n = graph.v();
        let mut edge_to = vec![None; n];
        let mut dist = vec![None; n];

        while let Step::Visit(edge) = walker.advance() {
            if edge.is_root() {
                dist[edge.dst] = Some(0);
            } else {
                edge_to[edge.dst] = Some(edge.src);
                dist[edge.dst] = dist[edge.src].map(|d| d + 1);
            }
        }

        debug!(source, reached = walker.visited_count(), "recorded paths");
        Self {
            source,
            edge_to,
            dist,
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    /// True if `dest` is reachable from the source. Out-of-range vertices are unreachable.
    pub fn path_exists(&self, dest: Vertex) -> bool {
        matches!(self.dist.get(dest), Some(Some(_)))
    }

    /// Number of vertices reached from the source, the source included.
    pub fn count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    /// Reached vertices in ascending order.
    pub fn reached(&self) -> Vec<Vertex> {
        self.dist
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|_| v))
            .collect()
    }

    /// Number of edges on the recorded path to `dest`.
    pub fn hops_to(&self, dest: Vertex) -> Result<usize> {
        self.check(dest)?;
        self.dist[dest].ok_or(GraphError::NoPath {
            start: self.source,
            dest,
        })
    }

    /// Vertices from the source to `dest`, both inclusive.
    pub fn path_to(&self, dest: Vertex) -> Result<Vec<Vertex>> {
        let hops = self.hops_to(dest)?;
        let mut path = Vec::with_capacity(hops + 1);
        let mut x = dest;
        path.push(x);
        while let Some(prev) = self.edge_to[x] {
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Ok(path)
    }

    fn check(&self, v: Vertex) -> Result<()> {
        if v >= self.dist.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.dist.len(),
            });
        }
        Ok(())
    }
}
