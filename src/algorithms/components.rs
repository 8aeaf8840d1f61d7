//! Connected components of an undirected graph.
//!
//! Vertices are scanned in index order; every unlabeled vertex opens a new
//! breadth-first subset walk, and everything that walk reaches gets the
//! next component id. Ids are 1-based and assigned in discovery order.

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphKind, Vertex};
use crate::traversal::{BfsWalker, Step, SubsetWalk};

#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    /// Component id per vertex, 1-based.
    id: Vec<usize>,
    /// Vertex count per component, indexed by `id - 1`.
    sizes: Vec<usize>,
}

impl ConnectedComponents {
    pub fn new(graph: &Graph) -> Result<Self> {
        if graph.kind() != GraphKind::Undirected {
            return Err(GraphError::KindMismatch {
                expected: GraphKind::Undirected,
                actual: graph.kind(),
            });
        }

        let mut id = vec![0usize; graph.v()];
        let mut sizes = Vec::new();
        let mut walker = BfsWalker::idle(graph);

        for v in 0..graph.v() {
            if id[v] != 0 {
                continue;
            }
            let component = sizes.len() + 1;
            let mut size = 0;
            walker.restart(v)?;
            while let Step::Visit(edge) = walker.advance() {
                id[edge.dst] = component;
                size += 1;
            }
            sizes.push(size);
        }

        debug!(vertices = graph.v(), components = sizes.len(), "labeled components");
        Ok(Self { id, sizes })
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Component id of `v`, in `1..=count()`.
    pub fn id(&self, v: Vertex) -> Result<usize> {
        self.id
            .get(v)
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.id.len(),
            })
    }

    /// True if `v` and `w` lie in the same component.
    pub fn is_connected(&self, v: Vertex, w: Vertex) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Number of vertices in component `id`, if it exists.
    pub fn size(&self, id: usize) -> Option<usize> {
        id.checked_sub(1).and_then(|i| self.sizes.get(i)).copied()
    }

    /// Vertices grouped by component, groups ordered by id, members ascending.
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut groups: Vec<Vec<Vertex>> = self
            .sizes
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect();
        for (v, &component) in self.id.iter().enumerate() {
            groups[component - 1].push(v);
        }
        groups
    }
}
