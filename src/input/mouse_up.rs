//! Pointer-up handling - finalize drags, clicks and rubber-band selection.

use crate::canvas::Canvas;
use crate::input::events::PointerEvent;
use crate::node::{NodeId, ReleaseReport};
use tracing::warn;

impl Canvas {
    /// Release the pointer everywhere: every pressed node reports exactly
    /// once, then the rubber band (if one was being dragged) reports its
    /// final box. A duplicate release with no intervening press finds no
    /// pressed node and no active band, and changes nothing.
    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) {
        let mut changed = false;

        let mut reports: Vec<(NodeId, ReleaseReport)> = Vec::new();
        for node in &mut self.nodes {
            let was_active = self.selected.contains(&node.id());
            if let Some(report) = node.pointer_up(was_active) {
                reports.push((node.id(), report));
            }
        }
        for (id, report) in reports {
            self.reconcile_release(id, report);
            changed = true;
        }

        if let Some(band) = self.rubber_band.pointer_up() {
            changed = true;
            if let Err(error) = self.reconcile_rubber_band(band) {
                // Measurement race: some node has no extent yet. Skip this
                // pass; the session stays consistent.
                warn!(%error, "rubber-band reconciliation aborted");
            }
        }

        if changed {
            self.notify();
        }
    }
}
