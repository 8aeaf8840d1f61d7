//! Graph algorithms built on the walkers.
//!
//! - [`ConnectedComponents`]: component labels for undirected graphs
//! - [`DirectedCycle`]: first directed cycle, if any
//! - [`Topological`]: topological order of a DAG
//! - [`SingleSourcePaths`]: BFS or DFS paths from one source

pub mod components;
pub mod cycle;
pub mod paths;
pub mod topological;

pub use components::ConnectedComponents;
pub use cycle::DirectedCycle;
pub use paths::SingleSourcePaths;
pub use topological::{topological_order, Topological};
