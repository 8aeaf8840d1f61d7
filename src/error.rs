//! Error types for graph construction, traversal and queries.

use thiserror::Error;

use crate::graph::{GraphKind, Vertex};

/// Errors that can occur while loading or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex argument was not in `[0, V)`.
    #[error("vertex {vertex} out of range (graph has {count} vertices)")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: Vertex,
        /// Number of vertices in the graph.
        count: usize,
    },

    /// A name was looked up in a symbol graph that never saw it.
    #[error("unknown symbol: '{0}'")]
    UnknownSymbol(String),

    /// The destination is not reachable from the source.
    #[error("no path from {start} to {dest}")]
    NoPath {
        /// Source vertex of the search.
        start: Vertex,
        /// Requested destination.
        dest: Vertex,
    },

    /// A topological order was requested for a digraph with a cycle.
    #[error("digraph has a cycle {cycle:?}, no topological order exists")]
    Cyclic {
        /// The witnessed cycle as a closed walk.
        cycle: Vec<Vertex>,
    },

    /// An algorithm was given the wrong flavour of graph.
    #[error("expected a {expected} graph, got a {actual} graph")]
    KindMismatch {
        expected: GraphKind,
        actual: GraphKind,
    },

    /// A record in a graph file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A walker snapshot does not fit the graph it is resumed on.
    #[error("snapshot covers {actual} vertices, graph has {expected}")]
    SnapshotMismatch { expected: usize, actual: usize },

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::VertexOutOfRange {
            vertex: 13,
            count: 13,
        };
        assert_eq!(
            err.to_string(),
            "vertex 13 out of range (graph has 13 vertices)"
        );

        let err = GraphError::KindMismatch {
            expected: GraphKind::Directed,
            actual: GraphKind::Undirected,
        };
        assert_eq!(
            err.to_string(),
            "expected a directed graph, got a undirected graph"
        );
    }

    #[test]
    fn test_cyclic_carries_cycle() {
        let err = GraphError::Cyclic {
            cycle: vec![3, 5, 4, 3],
        };
        assert!(err.to_string().contains("[3, 5, 4, 3]"));
        match err {
            GraphError::Cyclic { cycle } => assert_eq!(cycle.first(), cycle.last()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
