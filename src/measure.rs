//! Extent registry - measured sizes reported by the host.
//!
//! The session controller never reaches into renderer internals to learn how
//! big a node is. Instead the host pushes each node's rendered extent here
//! after layout (and again whenever it changes), and entries are removed when
//! the node leaves the collection. A node with no entry is "unmeasured" and
//! cannot answer bounding-box queries yet.

use crate::geometry::Extent;
use crate::node::NodeId;
use std::collections::HashMap;

/// Mapping of node id to last reported rendered extent.
#[derive(Debug, Clone, Default)]
pub struct ExtentRegistry {
    extents: HashMap<NodeId, Extent>,
}

impl ExtentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, extent: Extent) {
        self.extents.insert(id, extent);
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        self.extents.remove(&id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<Extent> {
        self.extents.get(&id).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.extents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}
