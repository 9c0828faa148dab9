//! Node controller - one draggable box on the canvas.
//!
//! A `Node` owns its position and its private press/drag flags. It never
//! decides selection: pointer handlers return report values describing what
//! happened (`was_active`, `was_pressed`, `was_dragging`), and the owning
//! [`Canvas`](crate::canvas::Canvas) reduces those reports into the active
//! set. This is the callback contract of the interaction model expressed as
//! return values, which also guarantees reconciliation never re-enters.

use crate::geometry::{BoundingBox, Extent, Pos};

/// Identity of a node, unique within its canvas for the canvas's lifetime.
///
/// Ids come from a monotonic per-canvas counter and are never reused, so a
/// stale id held across a delete simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node observed at the instant of a pointer press, before any
/// selection change was applied.
#[derive(Debug, Clone, Copy)]
pub struct PressReport {
    pub was_active: bool,
    pub was_pressed: bool,
    pub was_dragging: bool,
    pub position: Pos,
}

/// What a node observed at the instant of a pointer release.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseReport {
    pub was_active: bool,
    pub was_dragging: bool,
}

/// A single draggable node.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    position: Pos,
    /// Fixed at the last root-reference rebase; consumed by `drag_to`.
    offset: Pos,
    /// Pointer is down on this node and has not been released.
    pressed: bool,
    /// Pointer has moved since the press.
    dragging: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: Pos) -> Self {
        Self {
            id,
            position,
            offset: Pos::ZERO,
            pressed: false,
            dragging: false,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current bounding box, or `None` while the host has not measured this
    /// node's rendered extent.
    pub fn bounding_box(&self, extent: Option<Extent>) -> Option<BoundingBox> {
        extent.map(|e| BoundingBox::from_pos_extent(self.position, e))
    }

    /// Re-anchor the drag offset against a new root reference (the canvas's
    /// last press position). Runs for every node on every root change,
    /// pressed or not, so that a node joining a group drag later already has
    /// a current offset and a shared root moves the whole group rigidly.
    pub(crate) fn rebase_offset(&mut self, root: Pos) {
        self.offset = self.position - root;
    }

    /// Pointer pressed on this node's own surface. Reports the state seen
    /// before the press took effect, then marks the node pressed.
    pub(crate) fn pointer_down(&mut self, was_active: bool, position: Pos) -> PressReport {
        let report = PressReport {
            was_active,
            was_pressed: self.pressed,
            was_dragging: self.dragging,
            position,
        };
        self.pressed = true;
        report
    }

    /// First pointer move since the press, if any. Flips the private drag
    /// flag exactly once per press-release cycle; redundant moves are no-ops.
    pub(crate) fn begin_drag(&mut self) -> bool {
        if self.pressed && !self.dragging {
            self.dragging = true;
            return true;
        }
        false
    }

    /// Follow the cursor using the offset fixed at the last rebase.
    pub(crate) fn drag_to(&mut self, cursor: Pos) {
        self.position = cursor + self.offset;
    }

    /// Pointer released anywhere. No-op unless this node was pressed;
    /// otherwise reports and clears both private flags.
    pub(crate) fn pointer_up(&mut self, was_active: bool) -> Option<ReleaseReport> {
        if !self.pressed {
            return None;
        }
        let report = ReleaseReport {
            was_active,
            was_dragging: self.dragging,
        };
        self.pressed = false;
        self.dragging = false;
        Some(report)
    }
}
