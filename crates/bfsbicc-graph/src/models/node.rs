//! Vertex, level and component identifiers.
//!
//! All three are plain `u32` newtypes so per-vertex arrays of them stay
//! compact. Sentinels sit at `u32::MAX`.

/// Vertex ID, 0-indexed.
///
/// Ordered by value; the low point of a subtree is its smallest `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Largest ID a loaded graph may contain.
    pub const MAX: NodeId = NodeId(u32::MAX - 1);

    /// Parent of a BFS root, or of a vertex the traversal never reached.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Raw ID.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Slot in per-vertex arrays.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// BFS depth below the root of the current component.
///
/// Smaller is shallower. `UNVISITED` compares deeper than every real level,
/// so an unreached vertex can never look like an escape above a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Level(pub u32);

impl Level {
    /// Not reached by the current traversal.
    pub const UNVISITED: Level = Level(u32::MAX);

    /// Depth of the component root.
    pub const ROOT: Level = Level(0);

    pub const fn new(depth: u32) -> Self {
        Level(depth)
    }

    pub const fn is_visited(&self) -> bool {
        self.0 != u32::MAX
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Level of a vertex discovered from this one.
    pub const fn next(&self) -> Self {
        if self.0 >= u32::MAX - 1 {
            Level::UNVISITED
        } else {
            Level(self.0 + 1)
        }
    }
}

/// Biconnected component ID.
///
/// Borrowed from the low point of the folded subtree that owns the
/// component, so it is unique across the graph. Only equality and hashing
/// are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Raw ID.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<NodeId> for ComponentId {
    fn from(low: NodeId) -> Self {
        ComponentId(low.0)
    }
}
