//! Fuzz target for the biconnected-component decomposition.
//!
//! Builds random simple graphs and checks invariants that hold for every
//! graph: each edge is classified, the component count is bounded by the
//! edge count, and rerunning gives the same answer.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use bfsbicc_graph::{biconnected_components, is_biconnected, CsrGraph};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: vertex count and raw edge endpoints.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    vertices: u8,
    edges: Vec<(u8, u8)>,
}

fuzz_target!(|input: FuzzInput| {
    let n = input.vertices as usize;
    if n == 0 || input.edges.len() > 512 {
        return;
    }

    let mut seen = HashSet::new();
    let edges: Vec<(u32, u32)> = input
        .edges
        .iter()
        .map(|&(u, v)| (u as u32 % n as u32, v as u32 % n as u32))
        .filter(|&(u, v)| u != v && seen.insert((u.min(v), u.max(v))))
        .collect();

    let graph = CsrGraph::from_edges(n, &edges);
    let first = biconnected_components(&graph).unwrap();
    let second = biconnected_components(&graph).unwrap();

    assert_eq!(first.num_components(), second.num_components());
    assert_eq!(first.articulation_points(), second.articulation_points());
    assert!(first.num_components() <= edges.len());
    assert_eq!(first.edge_components().count(), edges.len());

    let biconnected = is_biconnected(&graph).unwrap();
    if biconnected && n > 2 {
        assert_eq!(first.num_components(), 1);
        assert!(first.articulation_points().is_empty());
    }
});
