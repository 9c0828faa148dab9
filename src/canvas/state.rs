//! The `Canvas` struct definition and its read-side API.

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{BoundingBox, Pos, PositiveBox};
use crate::input::ModifierTracker;
use crate::measure::ExtentRegistry;
use crate::node::{Node, NodeId};
use crate::rubber_band::RubberBand;
use crate::subscription::{SubscriberSet, Subscription};
use std::collections::HashSet;

/// The session controller: owns the node collection, the active set, the
/// rubber band and the shared input state, and is the only place selection
/// ever changes.
pub struct Canvas {
    /// Nodes in creation order. Order is only used for iteration.
    pub(crate) nodes: Vec<Node>,
    /// The active (selected) set. Exactly the result of the last
    /// reconciliation step.
    pub(crate) selected: HashSet<NodeId>,
    /// Measured extents reported by the host, keyed by node id.
    pub(crate) extents: ExtentRegistry,
    pub(crate) rubber_band: RubberBand,
    /// Shared modifier-key tracker (injected; see `with_modifiers`).
    pub(crate) modifiers: ModifierTracker,
    /// Monotonic id source. Never reused within this canvas.
    pub(crate) next_node_id: u64,
    /// Root reference: the last press position, broadcast to all nodes so
    /// their drag offsets stay anchored to it.
    pub(crate) last_click_pos: Pos,
    /// Last observed pointer position; spawn point for new nodes.
    pub(crate) cursor_pos: Pos,
    /// True while at least one active node has moved since the last release.
    pub(crate) group_drag: bool,
    pub(crate) subscribers: SubscriberSet,
}

/// Render-facing view of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub position: Pos,
    pub active: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_modifiers(ModifierTracker::new())
    }

    /// Build a canvas sharing an existing modifier tracker, for hosts that
    /// route one keyboard stream to several controllers.
    pub fn with_modifiers(modifiers: ModifierTracker) -> Self {
        Self {
            nodes: Vec::new(),
            selected: HashSet::new(),
            extents: ExtentRegistry::new(),
            rubber_band: RubberBand::new(),
            modifiers,
            next_node_id: 0,
            last_click_pos: Pos::ZERO,
            cursor_pos: Pos::ZERO,
            group_drag: false,
            subscribers: SubscriberSet::new(),
        }
    }

    // ------------------------------------------------------------------
    // Read side, consumed by the host renderer
    // ------------------------------------------------------------------

    /// Nodes in creation order, with their current position and active flag.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView> + '_ {
        self.nodes.iter().map(|node| NodeView {
            id: node.id(),
            position: node.position(),
            active: self.selected.contains(&node.id()),
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn active_count(&self) -> usize {
        self.selected.len()
    }

    /// Ids of the active set, in creation order.
    pub fn active_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(Node::id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Current bounding box of a node, answerable once the host has reported
    /// its extent.
    pub fn bounding_box(&self, id: NodeId) -> CanvasResult<BoundingBox> {
        let node = self.node(id).ok_or(CanvasError::UnknownNode(id))?;
        node.bounding_box(self.extents.get(id))
            .ok_or(CanvasError::UnmeasuredNode(id))
    }

    /// The live rubber-band rectangle in normalized form, while one is being
    /// dragged. Drawn by the host as a dashed overlay.
    pub fn rubber_band(&self) -> Option<PositiveBox> {
        self.rubber_band.view()
    }

    /// True while a group drag is in progress (some active node has moved
    /// since the last release).
    pub fn is_dragging(&self) -> bool {
        self.group_drag
    }

    /// The shared modifier tracker this canvas consults.
    pub fn modifiers(&self) -> &ModifierTracker {
        &self.modifiers
    }

    // ------------------------------------------------------------------
    // Change observation
    // ------------------------------------------------------------------

    /// Register a redraw callback, fired after every state-changing input
    /// event. Dropping the returned guard unregisters it.
    #[must_use]
    pub fn observe(&self, callback: impl FnMut() + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    pub(crate) fn notify(&self) {
        self.subscribers.notify();
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }
}
