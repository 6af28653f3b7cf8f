//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`CsrGraph`]: Compressed Sparse Row storage for undirected adjacency
//! - [`NodeId`], [`Level`], [`ComponentId`]: Graph node types

pub mod csr;
pub mod node;

pub use csr::{CsrGraph, CsrGraphBuilder};
pub use node::{ComponentId, Level, NodeId};
