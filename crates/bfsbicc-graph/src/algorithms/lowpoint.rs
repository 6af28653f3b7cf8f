//! Truncated low-point BFS.
//!
//! Given a tree edge `(parent, child)`, explores the still-valid part of the
//! graph reachable from `child` without stepping through `parent`. The search
//! stops at the first vertex found strictly above `child`'s level; if there is
//! none, the explored set is cut off from the rest of the component by
//! `parent` and is returned whole, together with its smallest vertex ID.
//!
//! This plays the role of Tarjan's `low[v]` test while only ever expanding a
//! breadth-first frontier.

use std::collections::VecDeque;

use super::bfs::BfsTree;
use crate::models::{CsrGraph, Level, NodeId};

/// Outcome of a low-point search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowPoint {
    /// The subtree reaches a vertex at `level`, strictly above the child.
    Escaped {
        /// Level of the first shallower vertex found.
        level: Level,
    },
    /// The subtree cannot get above the child's level without the parent.
    Enclosed {
        /// Smallest vertex ID in the subtree.
        low: NodeId,
        /// Every vertex of the subtree, child first, in BFS order.
        subtree: Vec<NodeId>,
    },
}

impl LowPoint {
    /// Check if the search escaped.
    pub fn is_escaped(&self) -> bool {
        matches!(self, LowPoint::Escaped { .. })
    }

    /// Level the search settled on: the escape level, or the child's own
    /// level for an enclosed subtree.
    pub fn level(&self, tree: &BfsTree) -> Level {
        match self {
            LowPoint::Escaped { level } => *level,
            LowPoint::Enclosed { subtree, .. } => subtree
                .first()
                .map(|&child| tree.level(child))
                .unwrap_or(Level::UNVISITED),
        }
    }
}

/// Reusable scratch space for low-point searches.
///
/// Visited marks are stamps rather than booleans, so starting a new search
/// is O(1) instead of clearing a per-vertex array.
#[derive(Debug, Clone, Default)]
pub struct LowPointSearch {
    stamps: Vec<u32>,
    stamp: u32,
    queue: VecDeque<NodeId>,
}

impl LowPointSearch {
    /// Create scratch space for a graph with `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            stamps: vec![0; num_vertices],
            stamp: 0,
            queue: VecDeque::new(),
        }
    }

    fn next_stamp(&mut self, num_vertices: usize) -> u32 {
        if self.stamps.len() != num_vertices {
            self.stamps = vec![0; num_vertices];
            self.stamp = 0;
        }
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            self.stamps.fill(0);
            self.stamp = 1;
        }
        self.stamp
    }

    /// Test whether `child`'s subtree can climb above `child`'s level
    /// without using the tree edge to `parent`.
    ///
    /// Only vertices with `valid[w] == true` are explored; retired vertices
    /// are invisible, which collapses subtrees folded earlier.
    pub fn search(
        &mut self,
        graph: &CsrGraph,
        tree: &BfsTree,
        parent: NodeId,
        child: NodeId,
        valid: &[bool],
    ) -> LowPoint {
        let stamp = self.next_stamp(graph.num_vertices());
        let child_level = tree.level(child);

        self.queue.clear();
        self.queue.push_back(child);
        self.stamps[child.index()] = stamp;
        self.stamps[parent.index()] = stamp;

        let mut subtree = vec![child];
        let mut low = child;

        while let Some(x) = self.queue.pop_front() {
            for &w in graph.neighbors(x) {
                let wi = w as usize;
                if !valid[wi] || self.stamps[wi] == stamp {
                    continue;
                }

                let level = tree.level(NodeId(w));
                if level < child_level {
                    return LowPoint::Escaped { level };
                }

                self.stamps[wi] = stamp;
                self.queue.push_back(NodeId(w));
                subtree.push(NodeId(w));
                low = low.min(NodeId(w));
            }
        }

        LowPoint::Enclosed { low, subtree }
    }
}

/// One-shot low-point search with fresh scratch space.
pub fn low_point(
    graph: &CsrGraph,
    tree: &BfsTree,
    parent: NodeId,
    child: NodeId,
    valid: &[bool],
) -> LowPoint {
    LowPointSearch::new(graph.num_vertices()).search(graph, tree, parent, child, valid)
}
