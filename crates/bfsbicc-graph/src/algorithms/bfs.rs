//! Root breadth-first search.
//!
//! Builds the BFS spanning tree of the component that contains a root vertex:
//! a parent per vertex, a level per vertex, and the vertices grouped into one
//! queue per level. The level queues are what the retirement sweep walks
//! bottom-up; every vertex in one queue can be processed independently once
//! the deeper queues are done, which is the level-synchronous structure a
//! parallel implementation would exploit.

use std::collections::VecDeque;

use crate::models::{CsrGraph, Level, NodeId};
use crate::{GraphError, Result};

/// BFS spanning tree of one connected component.
///
/// Arrays are sized to the whole graph; vertices outside the component keep
/// `Level::UNVISITED` and `NodeId::INVALID`.
#[derive(Debug, Clone)]
pub struct BfsTree {
    root: NodeId,
    parents: Vec<NodeId>,
    levels: Vec<Level>,
    level_queues: Vec<Vec<NodeId>>,
    /// Visited vertices in discovery order.
    order: Vec<NodeId>,
}

impl BfsTree {
    /// Create an empty tree for a graph with `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            root: NodeId::INVALID,
            parents: vec![NodeId::INVALID; num_vertices],
            levels: vec![Level::UNVISITED; num_vertices],
            level_queues: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Recompute the tree for the component of `root`, reusing buffers.
    ///
    /// Only entries touched by the previous traversal are reset, so walking
    /// many small components stays linear in the graph size.
    pub fn rebuild(&mut self, graph: &CsrGraph, root: NodeId) -> Result<()> {
        if !graph.contains(root) {
            return Err(GraphError::InvalidNodeId(root.0 as u64));
        }

        let n = graph.num_vertices();
        if self.levels.len() != n {
            *self = Self::new(n);
        }

        for &v in &self.order {
            self.levels[v.index()] = Level::UNVISITED;
            self.parents[v.index()] = NodeId::INVALID;
        }
        self.order.clear();
        self.level_queues.clear();

        self.root = root;
        self.levels[root.index()] = Level::ROOT;
        self.order.push(root);

        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut max_level = Level::ROOT;

        while let Some(node) = queue.pop_front() {
            let next = self.levels[node.index()].next();

            for &neighbor_id in graph.neighbors(node) {
                let neighbor = neighbor_id as usize;
                if !self.levels[neighbor].is_visited() {
                    self.levels[neighbor] = next;
                    self.parents[neighbor] = node;
                    self.order.push(NodeId(neighbor_id));
                    queue.push_back(NodeId(neighbor_id));
                    max_level = max_level.max(next);
                }
            }
        }

        // Group by level; each queue is ordered by vertex ID.
        self.level_queues = vec![Vec::new(); max_level.get() as usize + 1];
        for &v in &self.order {
            self.level_queues[self.levels[v.index()].get() as usize].push(v);
        }
        for queue in &mut self.level_queues {
            queue.sort_unstable();
        }

        Ok(())
    }

    /// Root of the current component.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Level of a vertex (`Level::UNVISITED` outside the component).
    pub fn level(&self, v: NodeId) -> Level {
        self.levels[v.index()]
    }

    /// Tree parent of a vertex (`NodeId::INVALID` for the root and outsiders).
    pub fn parent(&self, v: NodeId) -> NodeId {
        self.parents[v.index()]
    }

    /// Check if the vertex belongs to the current component.
    pub fn is_visited(&self, v: NodeId) -> bool {
        self.levels[v.index()].is_visited()
    }

    /// Per-vertex levels.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Per-vertex tree parents.
    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    /// Vertices grouped by level, shallowest first.
    pub fn level_queues(&self) -> &[Vec<NodeId>] {
        &self.level_queues
    }

    /// Deepest level reached.
    pub fn max_level(&self) -> Level {
        Level::new(self.level_queues.len().saturating_sub(1) as u32)
    }

    /// Component vertices in discovery order.
    pub fn visited(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of vertices in the component.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no traversal has been run yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Level queues from the deepest to the root level.
    pub fn levels_deepest_first(&self) -> impl Iterator<Item = (Level, &[NodeId])> + '_ {
        self.level_queues
            .iter()
            .enumerate()
            .rev()
            .map(|(i, q)| (Level::new(i as u32), q.as_slice()))
    }
}

/// Run the root BFS from `root`.
///
/// Uses a queue-based approach with O(V + E) complexity; levels are hop
/// counts from the root.
pub fn bfs_tree(graph: &CsrGraph, root: NodeId) -> Result<BfsTree> {
    let mut tree = BfsTree::new(graph.num_vertices());
    tree.rebuild(graph, root)?;
    Ok(tree)
}
