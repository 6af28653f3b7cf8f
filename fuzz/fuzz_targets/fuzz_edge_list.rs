//! Fuzz target for the edge-list loader.
//!
//! Feeds arbitrary text to the parser; anything it accepts must be a
//! structurally valid graph that decomposes without panicking.

#![no_main]

use bfsbicc_graph::{biconnected_components, parse_edge_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Keep allocations small
    let declared = text.split_whitespace().next().and_then(|t| t.parse::<usize>().ok());
    if declared.map_or(false, |n| n > 4096) {
        return;
    }

    if let Ok(graph) = parse_edge_list(text) {
        assert!(graph.validate().is_ok());
        let d = biconnected_components(&graph).expect("decomposition of a parsed graph");
        assert!(d.num_components() <= graph.num_edges());
    }
});
