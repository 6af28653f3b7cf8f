//! Graph algorithms.
//!
//! The decomposition is built from three breadth-first pieces:
//! - [`bfs`]: Root BFS producing parents, levels and level queues
//! - [`lowpoint`]: Truncated low-point BFS testing one tree edge
//! - [`bicc`]: Bottom-up retirement, edge classification and the driver

pub mod bfs;
pub mod bicc;
pub mod lowpoint;

pub use bfs::{bfs_tree, BfsTree};
pub use bicc::{
    articulation_points, biconnected_components, biconnected_components_with_config,
    count_biconnected_components, is_biconnected, BiccConfig, Decomposition,
    DecompositionContext,
};
pub use lowpoint::{low_point, LowPoint, LowPointSearch};
