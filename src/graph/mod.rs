//! Graph module: the vertex-indexed data model.
//!
//! Provides the adjacency-list store, its types, the numeric edge-list
//! loader and the canonical serializer.

pub mod builder;
pub mod engine;
pub mod format;
pub mod types;

pub use engine::Graph;
pub use types::{Edge, GraphKind, GraphStats, Vertex};
