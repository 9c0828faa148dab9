//! Node lifecycle - spawn, delete, extent reporting.

use crate::canvas::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::Extent;
use crate::node::{Node, NodeId};
use tracing::debug;

impl Canvas {
    /// Append one new node at the last tracked cursor position. The new node
    /// becomes the only active one. Ids are never reused.
    ///
    /// The node starts unmeasured: bounding-box queries against it fail until
    /// the host reports its rendered extent via [`Canvas::set_node_extent`].
    pub fn spawn(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        self.nodes.push(Node::new(id, self.cursor_pos));
        self.selected.clear();
        self.selected.insert(id);

        debug!(node = %id, left = self.cursor_pos.left, top = self.cursor_pos.top, "spawned node");
        self.notify();
        id
    }

    /// Remove every active node outright. No confirmation, no undo. Survivor
    /// order is preserved; extent-registry entries for removed nodes are
    /// dropped so no stale handle can answer queries for them.
    ///
    /// Returns the number of nodes removed.
    pub fn delete_active(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }

        let before = self.nodes.len();
        let selected = std::mem::take(&mut self.selected);
        self.nodes.retain(|node| !selected.contains(&node.id()));
        for id in &selected {
            self.extents.remove(*id);
        }
        // The drag group was exactly the active set; with it gone there is
        // nothing left mid-drag.
        self.group_drag = false;

        let removed = before - self.nodes.len();
        debug!(removed, remaining = self.nodes.len(), "deleted active nodes");
        self.notify();
        removed
    }

    /// Record a node's rendered extent, as measured by the host after layout.
    /// Call again whenever the rendered size changes.
    pub fn set_node_extent(&mut self, id: NodeId, extent: Extent) -> CanvasResult<()> {
        if self.node(id).is_none() {
            return Err(CanvasError::UnknownNode(id));
        }
        self.extents.insert(id, extent);
        Ok(())
    }
}
