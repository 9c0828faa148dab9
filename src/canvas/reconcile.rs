//! Selection reconciliation - the atomic active-set update per input event.
//!
//! Three event sources feed this module: node press/release reports, node
//! first-move reports, and the rubber band's final box. Each arrives at most
//! once per input event and is reduced into the active set synchronously, so
//! a later event can never observe a half-applied update. Reconciliation
//! never triggers further reconciliation.

use crate::canvas::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::PositiveBox;
use crate::node::{NodeId, PressReport, ReleaseReport};
use std::collections::HashSet;
use tracing::{debug, trace};

impl Canvas {
    /// A node was pressed. Re-anchors every node's drag offset to the press
    /// position, then applies the click-selection policy.
    pub(crate) fn reconcile_press(&mut self, id: NodeId, report: PressReport) {
        // Root reference first: offsets must be current before the next move
        // event consumes them, for pressed and unpressed nodes alike.
        self.last_click_pos = report.position;
        for node in &mut self.nodes {
            node.rebase_offset(report.position);
        }

        if self.modifiers.shift() {
            // Shift-click toggles this node only.
            if !self.selected.insert(id) {
                self.selected.remove(&id);
            }
            debug!(node = %id, active = self.selected.contains(&id), "shift-toggled node");
        } else if report.was_active {
            // Pressing inside the current selection keeps it intact so a
            // multi-selection can be dragged as a group.
            trace!(node = %id, "press on active node, selection kept");
        } else {
            self.activate_only(id);
            debug!(node = %id, "exclusively selected node");
        }
    }

    /// A pressed node was released. Plain click (no movement) collapses the
    /// selection to this node; a release that ends a drag only ends the drag.
    pub(crate) fn reconcile_release(&mut self, id: NodeId, report: ReleaseReport) {
        if !report.was_active || self.modifiers.shift() {
            return;
        }

        self.group_drag = false;
        if !report.was_dragging {
            self.activate_only(id);
            debug!(node = %id, "click-collapsed selection to node");
        }
    }

    /// A pressed node moved for the first time this cycle. Shift suppresses
    /// the group drag so shift-click stays a pure toggle.
    pub(crate) fn reconcile_first_move(&mut self) {
        if !self.modifiers.shift() {
            self.group_drag = true;
        }
    }

    /// The rubber band was released with the given normalized box. Overlaps
    /// it against every node; any unmeasured node aborts the whole pass (a
    /// measurement race, surfaced to the caller to log and no-op).
    pub(crate) fn reconcile_rubber_band(&mut self, band: PositiveBox) -> CanvasResult<()> {
        let band_box = band.bounding_box();

        let mut overlapping: HashSet<NodeId> = HashSet::new();
        for node in &self.nodes {
            let bounds = node
                .bounding_box(self.extents.get(node.id()))
                .ok_or(CanvasError::UnmeasuredNode(node.id()))?;
            if band_box.overlaps(&bounds) {
                overlapping.insert(node.id());
            }
        }

        if self.modifiers.shift() {
            // Additive: activate the overlapped nodes, leave the rest as-is.
            self.selected.extend(overlapping.iter().copied());
        } else {
            // Full replace. An empty overlap clears the selection, which is
            // how a plain background click deselects everything.
            self.selected = overlapping;
        }

        debug!(active = self.selected.len(), "rubber-band selection applied");
        Ok(())
    }

    fn activate_only(&mut self, id: NodeId) {
        self.selected.clear();
        self.selected.insert(id);
    }
}
