//! Plain-text edge-list loader.
//!
//! The format is a stream of whitespace-separated integers: a header with the
//! vertex count `V` and edge count `M`, followed by `M` pairs of 0-indexed
//! vertex IDs. Line breaks carry no meaning.
//!
//! ```text
//! 5 6
//! 0 1  1 2  2 0
//! 2 3  3 4  4 2
//! ```

use std::path::Path;

use tracing::debug;

use crate::models::{CsrGraph, CsrGraphBuilder, NodeId};
use crate::{GraphError, Result};

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.position += 1;
        Some(token)
    }

    fn parse_usize(&mut self, what: &str) -> Result<Option<usize>> {
        match self.next_raw() {
            None => Ok(None),
            Some(token) => token.parse::<usize>().map(Some).map_err(|e| GraphError::Parse {
                position: self.position,
                token: token.to_string(),
                message: format!("invalid {}: {}", what, e),
            }),
        }
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parse an edge list into an undirected graph.
///
/// # Example
///
/// ```
/// use bfsbicc_graph::loader::parse_edge_list;
///
/// let g = parse_edge_list("3 2\n0 1\n1 2\n").unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.num_edges(), 2);
/// ```
pub fn parse_edge_list(input: &str) -> Result<CsrGraph> {
    let mut tokens = Tokens::new(input);

    let num_vertices = tokens
        .parse_usize("vertex count")?
        .ok_or_else(|| GraphError::Parse {
            position: 0,
            token: String::new(),
            message: "missing vertex count".to_string(),
        })?;
    if num_vertices > NodeId::MAX.index() + 1 {
        return Err(GraphError::Parse {
            position: 1,
            token: num_vertices.to_string(),
            message: format!("vertex count exceeds {}", NodeId::MAX.index() + 1),
        });
    }

    let num_edges = tokens
        .parse_usize("edge count")?
        .ok_or_else(|| GraphError::Parse {
            position: 1,
            token: String::new(),
            message: "missing edge count".to_string(),
        })?;

    let mut builder = CsrGraphBuilder::new(num_vertices);
    for read in 0..num_edges {
        let (a, b) = match (tokens.parse_usize("vertex id")?, tokens.parse_usize("vertex id")?) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(GraphError::EdgeCountMismatch {
                    expected: num_edges,
                    actual: read,
                })
            }
        };

        for id in [a, b] {
            if id >= num_vertices {
                return Err(GraphError::InvalidNodeId(id as u64));
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop(a as u32));
        }

        builder.add_edge(a as u32, b as u32);
    }

    let leftover = tokens.remaining();
    if leftover > 0 {
        return Err(GraphError::EdgeCountMismatch {
            expected: num_edges,
            actual: num_edges + leftover.div_ceil(2),
        });
    }

    debug!(vertices = num_vertices, edges = num_edges, "parsed edge list");
    Ok(builder.build())
}

/// Read and parse an edge-list file.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<CsrGraph> {
    let input = std::fs::read_to_string(path.as_ref())?;
    parse_edge_list(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_triangle() {
        let g = parse_edge_list("3 3\n0 1\n1 2\n2 0\n").unwrap();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        assert!(g.has_edge(NodeId(2), NodeId(0)));
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_line_breaks_are_insignificant() {
        let g = parse_edge_list("  4 2 0 1\t\t2 3  ").unwrap();
        assert_eq!(g.num_edges(), 2);
        assert!(g.has_edge(NodeId(3), NodeId(2)));
    }

    #[test]
    fn test_header_only() {
        let g = parse_edge_list("7 0").unwrap();
        assert_eq!(g.num_vertices(), 7);
        assert!(g.is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse_edge_list(""),
            Err(GraphError::Parse { position: 0, .. })
        ));
        assert!(matches!(
            parse_edge_list("3"),
            Err(GraphError::Parse { position: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_token() {
        match parse_edge_list("3 1\n0 x\n") {
            Err(GraphError::Parse {
                position, token, ..
            }) => {
                assert_eq!(position, 4);
                assert_eq!(token, "x");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_ids_rejected() {
        assert!(matches!(
            parse_edge_list("3 1\n0 -1\n"),
            Err(GraphError::Parse { .. })
        ));
    }

    #[test]
    fn test_too_few_edges() {
        assert!(matches!(
            parse_edge_list("3 3\n0 1\n1 2\n"),
            Err(GraphError::EdgeCountMismatch {
                expected: 3,
                actual: 2
            })
        ));
        // Dangling half pair
        assert!(matches!(
            parse_edge_list("3 2\n0 1\n1\n"),
            Err(GraphError::EdgeCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_trailing_tokens() {
        assert!(matches!(
            parse_edge_list("3 1\n0 1\n1 2\n"),
            Err(GraphError::EdgeCountMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_out_of_range_id() {
        assert!(matches!(
            parse_edge_list("3 1\n0 3\n"),
            Err(GraphError::InvalidNodeId(3))
        ));
    }

    #[test]
    fn test_self_loop() {
        assert!(matches!(
            parse_edge_list("3 1\n2 2\n"),
            Err(GraphError::SelfLoop(2))
        ));
    }

    #[test]
    fn test_duplicate_edges_accepted() {
        let g = parse_edge_list("2 2\n0 1\n1 0\n").unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.degree(NodeId(0)), 2);
    }

    #[test]
    fn test_read_edge_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "4 3").unwrap();
        writeln!(file, "0 1").unwrap();
        writeln!(file, "1 2").unwrap();
        writeln!(file, "2 3").unwrap();

        let g = read_edge_list(file.path()).unwrap();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_edge_list("/nonexistent/bfsbicc/graph.txt");
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
