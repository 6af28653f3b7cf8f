//! Compressed Sparse Row (CSR) storage for undirected graphs.
//!
//! Every undirected edge `{u, v}` is stored twice, once in each endpoint's
//! row, so neighbor iteration never has to consult a reverse index.
//!
//! Memory layout:
//! - `row_ptr[i]` = starting index in col_idx for vertex i
//! - `col_idx[row_ptr[i]..row_ptr[i+1]]` = neighbors of vertex i, in insertion order

use super::node::NodeId;
use crate::{GraphError, Result};

/// Undirected graph in CSR form.
///
/// For a graph with N vertices and M edges:
/// - `row_ptr`: N+1 elements, where row_ptr[i] is the start of vertex i's neighbors
/// - `col_idx`: 2M elements, the neighbor vertex IDs
///
/// The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    num_vertices: usize,
    row_ptr: Vec<u64>,
    col_idx: Vec<u32>,
}

impl CsrGraph {
    /// Create a graph with `num_vertices` isolated vertices.
    pub fn empty(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            row_ptr: vec![0; num_vertices + 1],
            col_idx: Vec::new(),
        }
    }

    /// Create an undirected graph from an edge list.
    ///
    /// # Example
    ///
    /// ```
    /// use bfsbicc_graph::{CsrGraph, NodeId};
    ///
    /// // Triangle 0 - 1 - 2 - 0
    /// let g = CsrGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(g.num_edges(), 3);
    /// assert!(g.has_edge(NodeId(1), NodeId(0)));
    /// ```
    pub fn from_edges(num_vertices: usize, edges: &[(u32, u32)]) -> Self {
        CsrGraphBuilder::new(num_vertices).with_edges(edges).build()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Number of directed adjacency entries (twice the edge count).
    pub fn num_entries(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.col_idx.is_empty()
    }

    /// Check whether `node` is a vertex of this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.num_vertices
    }

    /// Number of neighbors of a vertex.
    pub fn degree(&self, node: NodeId) -> usize {
        let i = node.index();
        if i >= self.num_vertices {
            return 0;
        }
        (self.row_ptr[i + 1] - self.row_ptr[i]) as usize
    }

    /// Neighbors of a vertex (empty for out-of-range IDs).
    pub fn neighbors(&self, node: NodeId) -> &[u32] {
        let i = node.index();
        if i >= self.num_vertices {
            return &[];
        }
        let start = self.row_ptr[i] as usize;
        let end = self.row_ptr[i + 1] as usize;
        &self.col_idx[start..end]
    }

    /// Check if the edge `{u, v}` exists.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).contains(&v.0)
    }

    /// Iterate over every undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (0..self.num_vertices).flat_map(move |u| {
            let u = NodeId(u as u32);
            self.neighbors(u)
                .iter()
                .filter(move |&&v| u.0 < v)
                .map(move |&v| (u, NodeId(v)))
        })
    }

    /// Validate CSR structure and adjacency symmetry.
    pub fn validate(&self) -> Result<()> {
        if self.row_ptr.len() != self.num_vertices + 1 {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr length {} != num_vertices + 1 = {}",
                self.row_ptr.len(),
                self.num_vertices + 1
            )));
        }

        for i in 0..self.num_vertices {
            if self.row_ptr[i] > self.row_ptr[i + 1] {
                return Err(GraphError::InvalidCsr(format!(
                    "row_ptr not monotonic at index {}",
                    i
                )));
            }
        }

        let nnz = *self.row_ptr.last().unwrap_or(&0) as usize;
        if nnz != self.col_idx.len() {
            return Err(GraphError::InvalidCsr(format!(
                "row_ptr[-1] = {} != col_idx.len() = {}",
                nnz,
                self.col_idx.len()
            )));
        }

        for &col in &self.col_idx {
            if col as usize >= self.num_vertices {
                return Err(GraphError::InvalidCsr(format!(
                    "col_idx {} >= num_vertices {}",
                    col, self.num_vertices
                )));
            }
        }

        for u in 0..self.num_vertices {
            let u = NodeId(u as u32);
            for &v in self.neighbors(u) {
                let forward = self.neighbors(u).iter().filter(|&&w| w == v).count();
                let backward = self
                    .neighbors(NodeId(v))
                    .iter()
                    .filter(|&&w| w == u.0)
                    .count();
                if forward != backward {
                    return Err(GraphError::InvalidCsr(format!(
                        "edge {} - {} is not stored symmetrically",
                        u.0, v
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Builder for undirected CSR graphs.
#[derive(Debug, Default)]
pub struct CsrGraphBuilder {
    num_vertices: usize,
    edges: Vec<(u32, u32)>,
}

impl CsrGraphBuilder {
    /// Create new builder with given number of vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
        }
    }

    /// Add undirected edges from slice.
    pub fn with_edges(mut self, edges: &[(u32, u32)]) -> Self {
        self.edges.reserve(edges.len());
        for &(u, v) in edges {
            self.add_edge(u, v);
        }
        self
    }

    /// Add a single undirected edge.
    pub fn add_edge(&mut self, u: u32, v: u32) {
        self.edges.push((u, v));
    }

    /// Number of edges added so far.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edges were added.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Build the CSR graph.
    ///
    /// Entries whose endpoints are out of range are dropped; callers that need
    /// to reject them validate first (see [`crate::loader`]).
    pub fn build(self) -> CsrGraph {
        let n = self.num_vertices;

        // Both directions, in insertion order.
        let mut entries: Vec<(u32, u32)> = Vec::with_capacity(self.edges.len() * 2);
        for &(u, v) in &self.edges {
            if (u as usize) < n && (v as usize) < n {
                entries.push((u, v));
                entries.push((v, u));
            }
        }

        // Stable sort keeps each row's neighbors in insertion order.
        entries.sort_by_key(|e| e.0);

        let mut row_ptr = vec![0u64; n + 1];
        for &(src, _) in &entries {
            row_ptr[src as usize + 1] += 1;
        }

        // Cumulative sum
        for i in 1..=n {
            row_ptr[i] += row_ptr[i - 1];
        }

        let col_idx: Vec<u32> = entries.iter().map(|e| e.1).collect();

        CsrGraph {
            num_vertices: n,
            row_ptr,
            col_idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = CsrGraph::empty(5);
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 0);
        assert!(g.is_empty());
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_from_edges_is_symmetric() {
        // 0 - 1 - 2
        //     |
        //     3
        let g = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (1, 3)]);

        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.num_entries(), 6);
        assert!(g.has_edge(NodeId(0), NodeId(1)));
        assert!(g.has_edge(NodeId(1), NodeId(0)));
        assert!(g.has_edge(NodeId(3), NodeId(1)));
        assert!(!g.has_edge(NodeId(0), NodeId(2)));
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_neighbor_order_follows_insertion() {
        let g = CsrGraph::from_edges(4, &[(0, 3), (0, 1), (2, 0)]);
        assert_eq!(g.neighbors(NodeId(0)), &[3, 1, 2]);
    }

    #[test]
    fn test_degree() {
        let g = CsrGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2)]);

        assert_eq!(g.degree(NodeId(0)), 3);
        assert_eq!(g.degree(NodeId(1)), 2);
        assert_eq!(g.degree(NodeId(2)), 2);
        assert_eq!(g.degree(NodeId(3)), 1);
        assert_eq!(g.degree(NodeId(99)), 0);
    }

    #[test]
    fn test_edges_yields_each_edge_once() {
        let g = CsrGraph::from_edges(3, &[(1, 0), (2, 1), (0, 2)]);
        let edges: Vec<_> = g.edges().map(|(u, v)| (u.0, v.0)).collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_out_of_range_neighbors() {
        let g = CsrGraph::from_edges(2, &[(0, 1)]);
        assert!(g.neighbors(NodeId(7)).is_empty());
        assert!(!g.contains(NodeId(2)));
        assert!(g.contains(NodeId(1)));
    }

    #[test]
    fn test_builder() {
        let mut builder = CsrGraphBuilder::new(4);
        assert!(builder.is_empty());
        builder.add_edge(0, 1);
        builder.add_edge(0, 2);
        builder.add_edge(1, 3);
        assert_eq!(builder.len(), 3);

        let g = builder.build();
        assert_eq!(g.num_edges(), 3);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_asymmetric_rows() {
        let invalid = CsrGraph {
            num_vertices: 3,
            row_ptr: vec![0, 1, 1, 1],
            col_idx: vec![1],
        };
        assert!(matches!(invalid.validate(), Err(GraphError::InvalidCsr(_))));

        let out_of_range = CsrGraph {
            num_vertices: 2,
            row_ptr: vec![0, 1, 2],
            col_idx: vec![1, 10],
        };
        assert!(out_of_range.validate().is_err());
    }
}
