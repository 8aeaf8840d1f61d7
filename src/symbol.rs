//! Symbol graphs: graphs whose vertices are named by strings.
//!
//! Each data line is one adjacency record, `name sep name sep name ...`:
//! the first name is the source, the rest are its neighbours. Names get
//! vertex indices in first-seen order, and every `(source, neighbour)`
//! pair becomes one edge, duplicates included.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::LoaderConfig;
use crate::error::{GraphError, Result};
use crate::graph::builder::DataLines;
use crate::graph::{Graph, GraphKind, Vertex};

/// A [`Graph`] plus a bidirectional name/index table.
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    index: HashMap<String, Vertex>,
    keys: Vec<String>,
    graph: Graph,
}

impl SymbolGraph {
    /// Build a symbol graph from adjacency records.
    pub fn from_reader<R: BufRead>(kind: GraphKind, reader: R, config: &LoaderConfig) -> Result<Self> {
        config.validate()?;
        let mut lines = DataLines::new(reader, config);
        let mut index: HashMap<String, Vertex> = HashMap::new();
        let mut keys: Vec<String> = Vec::new();
        let mut records: Vec<Vec<Vertex>> = Vec::new();

        while let Some((line_no, line)) = lines.next_line()? {
            let ids: Vec<Vertex> = line
                .split(config.separator.as_str())
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| {
                    *index.entry(token.to_string()).or_insert_with(|| {
                        keys.push(token.to_string());
                        keys.len() - 1
                    })
                })
                .collect();

            if ids.is_empty() {
                if config.strict {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: "record has no names".to_string(),
                    });
                }
                warn!(line = line_no, "skipping record with no names");
                continue;
            }
            records.push(ids);
        }

        let mut graph = Graph::with_kind(kind, keys.len());
        for ids in &records {
            let source = ids[0];
            for &neighbour in &ids[1..] {
                graph.add_edge(source, neighbour)?;
            }
        }

        info!(
            kind = %kind,
            records = records.len(),
            vertices = graph.v(),
            edges = graph.e(),
            "symbol graph loaded"
        );
        Ok(Self { index, keys, graph })
    }

    /// Build a symbol graph from a file on disk.
    pub fn from_file(kind: GraphKind, path: &Path, config: &LoaderConfig) -> Result<Self> {
        debug!(path = %path.display(), "loading symbol graph file");
        let file = File::open(path)?;
        Self::from_reader(kind, BufReader::new(file), config)
    }

    pub fn from_str(kind: GraphKind, text: &str, config: &LoaderConfig) -> Result<Self> {
        Self::from_reader(kind, text.as_bytes(), config)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Vertex index of `name`.
    pub fn index(&self, name: &str) -> Result<Vertex> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownSymbol(name.to_string()))
    }

    /// Name of vertex `v`.
    pub fn name(&self, v: Vertex) -> Result<&str> {
        self.keys
            .get(v)
            .map(String::as_str)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                count: self.keys.len(),
            })
    }

    /// Names of a sequence of vertices, e.g. a path or an order.
    pub fn names(&self, vertices: &[Vertex]) -> Result<Vec<&str>> {
        vertices.iter().map(|&v| self.name(v)).collect()
    }

    /// The underlying index graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{topological_order, SingleSourcePaths};

    const ROUTES: &str = "\
JFK MCO
ORD DEN
ORD HOU
DFW PHX
JFK ATL
ORD DFW
ORD PHX
ATL HOU
DEN PHX
PHX LAX
JFK ORD
DEN LAS
DFW HOU
ORD ATL
LAS LAX
ATL MCO
HOU MCO
LAS PHX
";

    const JOBS: &str = "\
Algorithms/Theoretical CS/Databases/Scientific Computing
Introduction to CS/Advanced Programming/Algorithms
Advanced Programming/Scientific Computing
Scientific Computing/Computational Biology
Theoretical CS/Computational Biology/Artificial Intelligence
Linear Algebra/Theoretical CS
Calculus/Linear Algebra
Artificial Intelligence/Neural Networks/Robotics/Machine Learning
Machine Learning/Neural Networks
";

    fn routes() -> SymbolGraph {
        SymbolGraph::from_str(GraphKind::Undirected, ROUTES, &LoaderConfig::default()).unwrap()
    }

    fn jobs() -> SymbolGraph {
        let config = LoaderConfig::default().with_separator("/");
        SymbolGraph::from_str(GraphKind::Directed, JOBS, &config).unwrap()
    }

    #[test]
    fn test_first_seen_indices() {
        let sg = routes();
        assert_eq!(sg.len(), 10);
        assert_eq!(sg.graph().e(), 18);
        assert_eq!(sg.index("JFK").unwrap(), 0);
        assert_eq!(sg.index("MCO").unwrap(), 1);
        assert_eq!(sg.name(9).unwrap(), "LAS");
    }

    #[test]
    fn test_adjacency_by_name() {
        let sg = routes();
        let jfk = sg.index("JFK").unwrap();
        let adj = sg.graph().adj(jfk).unwrap();
        assert_eq!(sg.names(adj).unwrap(), vec!["MCO", "ATL", "ORD"]);
    }

    #[test]
    fn test_degrees_of_separation() {
        let sg = routes();
        let paths = SingleSourcePaths::breadth_first(sg.graph(), sg.index("JFK").unwrap()).unwrap();
        let path = paths.path_to(sg.index("LAS").unwrap()).unwrap();
        assert_eq!(sg.names(&path).unwrap(), vec!["JFK", "ORD", "DEN", "LAS"]);
    }

    #[test]
    fn test_unknown_symbol_is_recoverable() {
        let sg = routes();
        assert!(!sg.contains("SFO"));
        assert!(matches!(sg.index("SFO"), Err(GraphError::UnknownSymbol(name)) if name == "SFO"));
    }

    #[test]
    fn test_name_out_of_range() {
        let sg = routes();
        assert!(sg.name(9).is_ok());
        assert!(matches!(
            sg.name(10),
            Err(GraphError::VertexOutOfRange { vertex: 10, count: 10 })
        ));
    }

    #[test]
    fn test_symbol_digraph_multiword_names() {
        let sg = jobs();
        assert!(sg.graph().is_directed());
        assert!(sg.contains("Introduction to CS"));
        let algorithms = sg.index("Algorithms").unwrap();
        let intro = sg.index("Introduction to CS").unwrap();
        assert!(sg.graph().adj(intro).unwrap().contains(&algorithms));
        assert!(!sg.graph().adj(algorithms).unwrap().contains(&intro));
    }

    #[test]
    fn test_symbol_digraph_topological() {
        let sg = jobs();
        let order = topological_order(sg.graph()).unwrap();
        let pos = |name: &str| {
            let v = sg.index(name).unwrap();
            order.iter().position(|&x| x == v).unwrap()
        };
        assert!(pos("Calculus") < pos("Linear Algebra"));
        assert!(pos("Linear Algebra") < pos("Theoretical CS"));
        assert!(pos("Machine Learning") < pos("Neural Networks"));
    }

    #[test]
    fn test_lone_name_and_extra_separators() {
        let text = "# cities\nA  B\n\nC\nB   A\n";
        let sg = SymbolGraph::from_str(GraphKind::Undirected, text, &LoaderConfig::default()).unwrap();
        assert_eq!(sg.len(), 3);
        assert_eq!(sg.graph().e(), 2);
        assert!(sg.graph().adj(sg.index("C").unwrap()).unwrap().is_empty());
        // duplicates preserved
        assert_eq!(sg.graph().adj(0).unwrap(), &[1, 1]);
    }

    #[test]
    fn test_blank_record_strict() {
        let config = LoaderConfig::default().with_separator("/").with_strict(true);
        let err = SymbolGraph::from_str(GraphKind::Directed, "a/b\n//\n", &config).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let lenient = LoaderConfig::default().with_separator("/");
        let sg = SymbolGraph::from_str(GraphKind::Directed, "a/b\n//\n", &lenient).unwrap();
        assert_eq!(sg.len(), 2);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = LoaderConfig::default().with_separator("");
        let err = SymbolGraph::from_str(GraphKind::Undirected, "ab cd\n", &config).unwrap_err();
        assert!(matches!(err, GraphError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.txt");
        std::fs::write(&path, ROUTES).unwrap();
        let sg = SymbolGraph::from_file(GraphKind::Undirected, &path, &LoaderConfig::default()).unwrap();
        assert_eq!(sg.len(), 10);
        assert!(!sg.is_empty());
    }
}
