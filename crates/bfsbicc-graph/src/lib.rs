//! Biconnected components and articulation points using only breadth-first
//! traversals.
//!
//! No depth-first search and no recursion: every step is a BFS, so the work
//! of one BFS level is independent across the frontier. This crate provides:
//!
//! - **CSR Graph**: Compressed Sparse Row storage for undirected graphs
//! - **Root BFS**: Parents, levels and per-level vertex queues of a component
//! - **Low-point BFS**: Truncated search deciding whether a tree edge separates
//! - **Decomposition**: Bottom-up subtree retirement, articulation points and
//!   the edge-to-component assignment, over every connected component
//! - **Loader**: The plain-text `V M` + edge-pairs format
//!
//! # Example
//!
//! ```
//! use bfsbicc_graph::{count_biconnected_components, is_biconnected, CsrGraph};
//!
//! // Path 0 - 1 - 2 - 3: every edge is its own component
//! let path = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
//! assert_eq!(count_biconnected_components(&path).unwrap(), 3);
//!
//! // A 4-cycle is biconnected
//! let ring = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
//! assert!(is_biconnected(&ring).unwrap());
//! ```

pub mod algorithms;
pub mod loader;
pub mod models;

// Re-export main types
pub use algorithms::bfs::{bfs_tree, BfsTree};
pub use algorithms::bicc::{
    articulation_points, biconnected_components, biconnected_components_with_config,
    count_biconnected_components, is_biconnected, BiccConfig, Decomposition,
    DecompositionContext,
};
pub use algorithms::lowpoint::{low_point, LowPoint, LowPointSearch};
pub use loader::{parse_edge_list, read_edge_list};
pub use models::csr::{CsrGraph, CsrGraphBuilder};
pub use models::node::{ComponentId, Level, NodeId};

/// Graph algorithm error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Invalid node ID.
    #[error("Invalid node ID: {0}")]
    InvalidNodeId(u64),

    /// Invalid CSR format.
    #[error("Invalid CSR format: {0}")]
    InvalidCsr(String),

    /// Malformed edge-list token.
    #[error("Parse error at token {position} ({token:?}): {message}")]
    Parse {
        position: usize,
        token: String,
        message: String,
    },

    /// Edge list holds a different number of pairs than its header says.
    #[error("Edge count mismatch: header declares {expected}, found {actual}")]
    EdgeCountMismatch { expected: usize, actual: usize },

    /// Edge from a vertex to itself.
    #[error("Self-loop on vertex {0}")]
    SelfLoop(u32),

    /// IO error while reading a graph.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
