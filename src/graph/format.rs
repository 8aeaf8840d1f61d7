//! Canonical serialization and pretty-printing.
//!
//! The serialized form is the numeric edge-list format read by
//! [`builder`](super::builder): `V`, `E`, then one `v w` line per edge.
//! Undirected edges are written once, from their lower endpoint.

use std::fmt::{self, Write as _};

use super::engine::Graph;

impl Graph {
    /// Render the graph in the loader's edge-list format.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", self.v());
        let _ = writeln!(out, "{}", self.e());
        for edge in self.edges() {
            let _ = writeln!(out, "{} {}", edge.src, edge.dst);
        }
        out
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v(), self.e())?;
        for v in 0..self.v() {
            write!(f, "{v} :")?;
            for w in self.neighbors(v) {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
