//! Biconnected components and articulation points.
//!
//! Every connected component is handled in four steps:
//!
//! 1. Root BFS ([`BfsTree`]) from the smallest unprocessed vertex.
//! 2. Bottom-up retirement: level queues are walked deepest first, and every
//!    still-active vertex tests its tree edge with a low-point search. An
//!    enclosed subtree is folded onto its tree parent, which separates it.
//! 3. Edge classification: every edge gets the low-point ID of the side it
//!    belongs to.
//! 4. The component IDs seen are merged into one set for the whole graph.
//!
//! All run-wide state lives in a [`DecompositionContext`]; nothing is global.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, trace};

use super::bfs::BfsTree;
use super::lowpoint::{LowPoint, LowPointSearch};
use crate::models::{ComponentId, CsrGraph, NodeId};
use crate::{GraphError, Result};

/// Decomposition configuration.
#[derive(Debug, Clone)]
pub struct BiccConfig {
    /// Keep the edge-to-component map in the result.
    pub record_edges: bool,
    /// Answer graphs with at most two vertices without traversing them.
    pub small_graph_shortcuts: bool,
}

impl Default for BiccConfig {
    fn default() -> Self {
        Self {
            record_edges: true,
            small_graph_shortcuts: true,
        }
    }
}

impl BiccConfig {
    /// Create new decomposition configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop the edge-to-component map.
    pub fn with_record_edges(mut self, record: bool) -> Self {
        self.record_edges = record;
        self
    }

    /// Enable or disable the trivial answers for tiny graphs.
    pub fn with_small_graph_shortcuts(mut self, enabled: bool) -> Self {
        self.small_graph_shortcuts = enabled;
        self
    }
}

/// Per-vertex state that persists across components.
#[derive(Debug, Clone)]
struct VertexState {
    /// Low-point ID (`Low`).
    low: Vec<NodeId>,
    /// Attachment vertex once folded, self before (`Par`).
    owner: Vec<NodeId>,
    /// Cleared when the vertex is folded; never set again.
    valid: Vec<bool>,
    /// Articulation flags (`Art`).
    articulation: Vec<bool>,
    /// Enclosed subtrees folded onto each vertex.
    folds: Vec<u32>,
}

impl VertexState {
    fn new(n: usize) -> Self {
        let identity: Vec<NodeId> = (0..n as u32).map(NodeId).collect();
        Self {
            low: identity.clone(),
            owner: identity,
            valid: vec![true; n],
            articulation: vec![false; n],
            folds: vec![0; n],
        }
    }

    fn is_active(&self, u: NodeId) -> bool {
        self.owner[u.index()] == u && self.valid[u.index()]
    }

    /// Fold an enclosed subtree onto `attach`.
    ///
    /// A non-root attachment separates the subtree from the root, so it is an
    /// articulation point immediately. The root only separates once a second
    /// subtree is folded onto it.
    fn fold(&mut self, attach: NodeId, attach_is_root: bool, low: NodeId, subtree: &[NodeId]) {
        let folds = &mut self.folds[attach.index()];
        *folds += 1;
        if !attach_is_root || *folds > 1 {
            self.articulation[attach.index()] = true;
        }

        for &w in subtree {
            self.low[w.index()] = low;
            self.owner[w.index()] = attach;
            self.valid[w.index()] = false;
        }
    }

    /// Component of edge `{u, v}`.
    ///
    /// Endpoints with the same low point share its component; an endpoint
    /// folded directly onto the other owns the tree edge between them.
    fn edge_component(&self, u: NodeId, v: NodeId) -> ComponentId {
        let (lu, lv) = (self.low[u.index()], self.low[v.index()]);
        if lu == lv || self.owner[u.index()] == v {
            ComponentId::from(lu)
        } else {
            ComponentId::from(lv)
        }
    }
}

/// Run-wide state of one decomposition.
///
/// Components are processed one at a time with [`process_component`]; the
/// accumulated result is taken with [`finish`].
///
/// [`process_component`]: DecompositionContext::process_component
/// [`finish`]: DecompositionContext::finish
pub struct DecompositionContext<'g> {
    graph: &'g CsrGraph,
    config: BiccConfig,
    tree: BfsTree,
    search: LowPointSearch,
    state: VertexState,
    /// Vertices already covered by some component's root BFS.
    processed: Vec<bool>,
    component_ids: HashSet<ComponentId>,
    edge_components: HashMap<(NodeId, NodeId), ComponentId>,
    connected_components: usize,
}

impl<'g> DecompositionContext<'g> {
    /// Create a fresh context for `graph`.
    pub fn new(graph: &'g CsrGraph, config: BiccConfig) -> Self {
        let n = graph.num_vertices();
        Self {
            graph,
            config,
            tree: BfsTree::new(n),
            search: LowPointSearch::new(n),
            state: VertexState::new(n),
            processed: vec![false; n],
            component_ids: HashSet::new(),
            edge_components: HashMap::new(),
            connected_components: 0,
        }
    }

    /// Decompose the connected component containing `root`.
    ///
    /// Returns `Ok(false)` without doing anything if `root` was already
    /// covered by an earlier component.
    pub fn process_component(&mut self, root: NodeId) -> Result<bool> {
        if !self.graph.contains(root) {
            return Err(GraphError::InvalidNodeId(root.0 as u64));
        }
        if self.processed[root.index()] {
            return Ok(false);
        }

        self.tree.rebuild(self.graph, root)?;
        self.connected_components += 1;
        for &v in self.tree.visited() {
            self.processed[v.index()] = true;
        }

        debug!(
            root = root.0,
            vertices = self.tree.len(),
            depth = self.tree.max_level().get(),
            "decomposing connected component"
        );

        self.retire_levels();
        self.classify_edges();
        Ok(true)
    }

    /// Bottom-up sweep over the level queues of the current tree.
    ///
    /// The queues are never modified: a vertex is handled only while it is
    /// still active (self-owned and valid), and each appears exactly once.
    fn retire_levels(&mut self) {
        let graph = self.graph;
        let root = self.tree.root();

        for (level, queue) in self.tree.levels_deepest_first() {
            for &u in queue {
                if !self.state.is_active(u) || u == root {
                    continue;
                }

                let v = self.tree.parent(u);
                let outcome = self
                    .search
                    .search(graph, &self.tree, v, u, &self.state.valid);
                trace!(
                    level = level.get(),
                    child = u.0,
                    parent = v.0,
                    escaped = outcome.is_escaped(),
                    reached = outcome.level(&self.tree).get(),
                    "low-point search"
                );

                if let LowPoint::Enclosed { low, subtree } = outcome {
                    debug_assert!(self.tree.level(u) >= self.tree.level(v));
                    self.state.fold(v, v == root, low, &subtree);
                }
            }
        }
    }

    /// Assign every edge of the current component to a component ID.
    fn classify_edges(&mut self) {
        let graph = self.graph;

        for &u in self.tree.visited() {
            for &v in graph.neighbors(u) {
                let v = NodeId(v);
                if u >= v || !self.tree.is_visited(v) {
                    continue;
                }

                let id = self.state.edge_component(u, v);
                self.component_ids.insert(id);
                if self.config.record_edges {
                    self.edge_components.insert((u, v), id);
                }
            }
        }
    }

    /// Number of connected components processed so far.
    pub fn connected_components(&self) -> usize {
        self.connected_components
    }

    /// Consume the context and return the accumulated decomposition.
    pub fn finish(self) -> Decomposition {
        let VertexState {
            low,
            owner,
            articulation,
            ..
        } = self.state;

        Decomposition {
            low,
            owner,
            articulation,
            component_ids: self.component_ids,
            edge_components: self.edge_components,
            connected_components: self.connected_components,
        }
    }
}

/// Result of a biconnected-component decomposition.
#[derive(Debug, Clone, Default)]
pub struct Decomposition {
    low: Vec<NodeId>,
    owner: Vec<NodeId>,
    articulation: Vec<bool>,
    component_ids: HashSet<ComponentId>,
    edge_components: HashMap<(NodeId, NodeId), ComponentId>,
    connected_components: usize,
}

impl Decomposition {
    /// Fixed answers for graphs with at most two vertices.
    fn trivial(graph: &CsrGraph, config: &BiccConfig) -> Option<Self> {
        let n = graph.num_vertices();
        let identity = || (0..n as u32).map(NodeId).collect::<Vec<_>>();

        let mut d = match n {
            0 | 1 => Self {
                low: identity(),
                owner: identity(),
                articulation: vec![false; n],
                connected_components: n,
                ..Self::default()
            },
            2 if graph.has_edge(NodeId(0), NodeId(1)) => Self {
                low: identity(),
                owner: vec![NodeId(0), NodeId(0)],
                articulation: vec![false; 2],
                connected_components: 1,
                ..Self::default()
            },
            _ => return None,
        };

        if n == 2 {
            let id = ComponentId::from(NodeId(1));
            d.component_ids.insert(id);
            if config.record_edges {
                d.edge_components.insert((NodeId(0), NodeId(1)), id);
            }
        }
        Some(d)
    }

    /// Number of biconnected components in the whole graph.
    pub fn num_components(&self) -> usize {
        self.component_ids.len()
    }

    /// Number of connected components.
    pub fn connected_components(&self) -> usize {
        self.connected_components
    }

    /// Check if `v` is an articulation point.
    pub fn is_articulation(&self, v: NodeId) -> bool {
        self.articulation.get(v.index()).copied().unwrap_or(false)
    }

    /// All articulation points, in increasing ID order.
    pub fn articulation_points(&self) -> Vec<NodeId> {
        self.articulation
            .iter()
            .enumerate()
            .filter(|(_, &art)| art)
            .map(|(v, _)| NodeId(v as u32))
            .collect()
    }

    /// Low-point ID of a vertex.
    pub fn low_point(&self, v: NodeId) -> Option<NodeId> {
        self.low.get(v.index()).copied()
    }

    /// Vertex a vertex was folded onto (itself if never folded).
    pub fn owner(&self, v: NodeId) -> Option<NodeId> {
        self.owner.get(v.index()).copied()
    }

    /// Component of edge `{u, v}`, in either orientation.
    ///
    /// Always `None` when edges were not recorded.
    pub fn component_of_edge(&self, u: NodeId, v: NodeId) -> Option<ComponentId> {
        let key = if u < v { (u, v) } else { (v, u) };
        self.edge_components.get(&key).copied()
    }

    /// Recorded `(u, v)` edges (with `u < v`) and their components.
    pub fn edge_components(&self) -> impl Iterator<Item = ((NodeId, NodeId), ComponentId)> + '_ {
        self.edge_components.iter().map(|(&e, &c)| (e, c))
    }

    /// Distinct component IDs.
    pub fn component_ids(&self) -> &HashSet<ComponentId> {
        &self.component_ids
    }
}

/// Decompose `graph` into biconnected components.
///
/// # Example
///
/// ```
/// use bfsbicc_graph::{biconnected_components, CsrGraph, NodeId};
///
/// // Two triangles sharing vertex 2
/// let g = CsrGraph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
/// let d = biconnected_components(&g).unwrap();
/// assert_eq!(d.num_components(), 2);
/// assert_eq!(d.articulation_points(), vec![NodeId(2)]);
/// ```
pub fn biconnected_components(graph: &CsrGraph) -> Result<Decomposition> {
    biconnected_components_with_config(graph, &BiccConfig::default())
}

/// Decompose `graph` with configuration.
pub fn biconnected_components_with_config(
    graph: &CsrGraph,
    config: &BiccConfig,
) -> Result<Decomposition> {
    if config.small_graph_shortcuts {
        if let Some(d) = Decomposition::trivial(graph, config) {
            debug!(vertices = graph.num_vertices(), "trivial graph, skipping traversal");
            return Ok(d);
        }
    }

    let mut ctx = DecompositionContext::new(graph, config.clone());
    for v in 0..graph.num_vertices() {
        ctx.process_component(NodeId(v as u32))?;
    }
    let d = ctx.finish();

    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        connected = d.connected_components(),
        biconnected = d.num_components(),
        "decomposition complete"
    );
    Ok(d)
}

/// Number of biconnected components of `graph`.
pub fn count_biconnected_components(graph: &CsrGraph) -> Result<usize> {
    let config = BiccConfig::default().with_record_edges(false);
    Ok(biconnected_components_with_config(graph, &config)?.num_components())
}

/// Articulation points of `graph`, in increasing ID order.
pub fn articulation_points(graph: &CsrGraph) -> Result<Vec<NodeId>> {
    let config = BiccConfig::default().with_record_edges(false);
    Ok(biconnected_components_with_config(graph, &config)?.articulation_points())
}

/// Check whether `graph` is biconnected.
///
/// Two vertices are biconnected when joined by an edge. Larger graphs must be
/// connected and free of articulation points.
pub fn is_biconnected(graph: &CsrGraph) -> Result<bool> {
    match graph.num_vertices() {
        0 | 1 => Ok(false),
        2 => Ok(graph.has_edge(NodeId(0), NodeId(1))),
        _ => {
            let config = BiccConfig::default().with_record_edges(false);
            let d = biconnected_components_with_config(graph, &config)?;
            Ok(d.connected_components() == 1 && d.articulation_points().is_empty())
        }
    }
}
