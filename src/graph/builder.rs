//! Graph builder: loads a graph from the numeric edge-list format.
//!
//! ```text
//! # comment
//! 13          <- V
//! 13          <- E
//! 0 5         <- E lines of "v w"
//! 4 3
//! ```
//!
//! Blank lines and comment lines are skipped anywhere. Records that are
//! malformed or name an out-of-range vertex are dropped with a warning
//! unless the loader runs in strict mode.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::engine::Graph;
use super::types::{GraphKind, Vertex};
use crate::config::LoaderConfig;
use crate::error::{GraphError, Result};

/// Load a graph from any buffered reader.
pub fn from_reader<R: BufRead>(kind: GraphKind, reader: R, config: &LoaderConfig) -> Result<Graph> {
    let mut lines = DataLines::new(reader, config);

    let (header_line, vertices) = lines.header("vertex count")?;
    if vertices > config.max_vertices {
        return Err(GraphError::Parse {
            line: header_line,
            message: format!(
                "vertex count {vertices} exceeds the configured limit of {}",
                config.max_vertices
            ),
        });
    }
    let (_, expected_edges) = lines.header("edge count")?;
    let mut graph = Graph::try_with_kind(kind, vertices).map_err(|e| GraphError::Parse {
        line: header_line,
        message: format!("cannot allocate {vertices} vertices: {e}"),
    })?;

    let mut records = 0usize;
    let mut skipped = 0usize;
    while records < expected_edges {
        let Some((line_no, line)) = lines.next_line()? else {
            if config.strict {
                return Err(GraphError::Parse {
                    line: lines.line_no,
                    message: format!("expected {expected_edges} edges, found {records}"),
                });
            }
            warn!(expected = expected_edges, found = records, "edge list ended early");
            break;
        };
        records += 1;

        let Some((v, w)) = parse_pair(&line) else {
            if config.strict {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("malformed edge record '{line}'"),
                });
            }
            warn!(line = line_no, record = %line, "skipping malformed edge record");
            skipped += 1;
            continue;
        };

        if let Err(e) = graph.add_edge(v, w) {
            if config.strict {
                return Err(e);
            }
            warn!(line = line_no, v, w, "skipping out-of-range edge");
            skipped += 1;
        }
    }

    info!(
        kind = %kind,
        vertices = graph.v(),
        edges = graph.e(),
        skipped,
        "graph loaded"
    );
    Ok(graph)
}

/// Load a graph from a file on disk.
pub fn from_file(kind: GraphKind, path: &Path, config: &LoaderConfig) -> Result<Graph> {
    debug!(path = %path.display(), "loading graph file");
    let file = File::open(path)?;
    from_reader(kind, BufReader::new(file), config)
}

/// Load a graph from an in-memory string, e.g. the output of `serialize`.
pub fn from_str(kind: GraphKind, text: &str, config: &LoaderConfig) -> Result<Graph> {
    from_reader(kind, text.as_bytes(), config)
}

/// First two unsigned integers of a record.
fn parse_pair(line: &str) -> Option<(Vertex, Vertex)> {
    let mut fields = line.split_whitespace();
    let v = fields.next()?.parse().ok()?;
    let w = fields.next()?.parse().ok()?;
    Some((v, w))
}

/// Iterator over the data-bearing lines of a reader, with line numbers.
pub(crate) struct DataLines<'c, R> {
    reader: R,
    config: &'c LoaderConfig,
    line_no: usize,
    buf: String,
}

impl<'c, R: BufRead> DataLines<'c, R> {
    pub(crate) fn new(reader: R, config: &'c LoaderConfig) -> Self {
        Self {
            reader,
            config,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Next trimmed, non-blank, non-comment line.
    pub(crate) fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let line = self.buf.trim();
            if !self.config.is_skippable(line) {
                return Ok(Some((self.line_no, line.to_string())));
            }
        }
    }

    /// A header line holding a single count, with its line number.
    fn header(&mut self, what: &str) -> Result<(usize, usize)> {
        let Some((line_no, line)) = self.next_line()? else {
            return Err(GraphError::Parse {
                line: self.line_no,
                message: format!("missing {what}"),
            });
        };
        line.split_whitespace()
            .next()
            .and_then(|field| field.parse().ok())
            .map(|count| (line_no, count))
            .ok_or_else(|| GraphError::Parse {
                line: line_no,
                message: format!("bad {what} '{line}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_G: &str = "\
# tinyG
13
13
0 5
4 3
0 1
9 12
6 4
5 4
0 2
11 12
9 10
0 6
7 8
9 11
5 3
";

    #[test]
    fn test_load_tiny_graph() {
        let g = from_str(GraphKind::Undirected, TINY_G, &LoaderConfig::default()).unwrap();
        assert_eq!(g.v(), 13);
        assert_eq!(g.e(), 13);
        assert_eq!(g.adj(0).unwrap(), &[5, 1, 2, 6]);
        assert_eq!(g.adj(9).unwrap(), &[12, 10, 11]);
    }

    #[test]
    fn test_load_directed_keeps_direction() {
        let text = "3\n2\n0 1\n2 1\n";
        let g = from_str(GraphKind::Directed, text, &LoaderConfig::default()).unwrap();
        assert_eq!(g.adj(0).unwrap(), &[1]);
        assert!(g.adj(1).unwrap().is_empty());
        assert_eq!(g.adj(2).unwrap(), &[1]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "\n# header\n3\n\n# edges follow\n2\n0 1\n\n# mid\n1 2\n";
        let g = from_str(GraphKind::Undirected, text, &LoaderConfig::default()).unwrap();
        assert_eq!(g.e(), 2);
    }

    #[test]
    fn test_out_of_range_edge_skipped() {
        let text = "3\n3\n0 1\n1 3\n2 0\n";
        let g = from_str(GraphKind::Undirected, text, &LoaderConfig::default()).unwrap();
        assert_eq!(g.v(), 3);
        assert_eq!(g.e(), 2);
        assert_eq!(g.adj(1).unwrap(), &[0]);
    }

    #[test]
    fn test_malformed_edge_skipped() {
        let text = "3\n3\n0 1\nzero two\n-1 2\n";
        let g = from_str(GraphKind::Directed, text, &LoaderConfig::default()).unwrap();
        assert_eq!(g.e(), 1);
    }

    #[test]
    fn test_strict_mode_fails() {
        let strict = LoaderConfig::default().with_strict(true);
        let err = from_str(GraphKind::Undirected, "3\n1\n1 3\n", &strict).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 3, count: 3 }));

        let err = from_str(GraphKind::Undirected, "3\n1\n1\n", &strict).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));

        let err = from_str(GraphKind::Undirected, "3\n2\n0 1\n", &strict).unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn test_short_edge_list_tolerated() {
        let g = from_str(GraphKind::Undirected, "3\n5\n0 1\n", &LoaderConfig::default()).unwrap();
        assert_eq!(g.e(), 1);
    }

    #[test]
    fn test_missing_header() {
        let err = from_str(GraphKind::Undirected, "# nothing\n", &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));

        let err = from_str(GraphKind::Undirected, "three\n0\n", &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_huge_vertex_header() {
        let config = LoaderConfig::default();
        let err = from_str(GraphKind::Undirected, "18446744073709551615\n0\n", &config).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = from_str(GraphKind::Directed, "# big\n1000000000000\n0\n", &config).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_vertex_limit_is_configurable() {
        let config = LoaderConfig {
            max_vertices: 3,
            ..LoaderConfig::default()
        };
        assert!(from_str(GraphKind::Undirected, "3\n1\n0 2\n", &config).is_ok());
        let err = from_str(GraphKind::Undirected, "4\n0\n", &config).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_custom_comment_marker() {
        let config = LoaderConfig {
            comment: '%',
            ..LoaderConfig::default()
        };
        let g = from_str(GraphKind::Undirected, "% c\n2\n1\n0 1\n", &config).unwrap();
        assert_eq!(g.e(), 1);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tinyG.txt");
        std::fs::write(&path, TINY_G).unwrap();
        let g = from_file(GraphKind::Undirected, &path, &LoaderConfig::default()).unwrap();
        assert_eq!(g.v(), 13);

        let missing = from_file(
            GraphKind::Undirected,
            &dir.path().join("nope.txt"),
            &LoaderConfig::default(),
        );
        assert!(matches!(missing, Err(GraphError::Io(_))));
    }
}
