//! Pointer-down handling - press routing and click selection.

use crate::canvas::Canvas;
use crate::input::events::{PointerEvent, PointerTarget};
use tracing::{trace, warn};

impl Canvas {
    /// Route a pointer press to the node it landed on, or anchor the rubber
    /// band when it landed on the background.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        match event.target {
            PointerTarget::Node(id) => {
                // Liveness check: the host may still deliver events for a
                // node deleted this frame.
                let was_active = self.selected.contains(&id);
                let Some(node) = self.node_mut(id) else {
                    warn!(node = %id, "pointer down on unknown node, dropping event");
                    return;
                };
                let report = node.pointer_down(was_active, event.position);
                trace!(node = %id, was_active, "node pressed");
                self.reconcile_press(id, report);
            }
            PointerTarget::Canvas => {
                trace!(
                    left = event.position.left,
                    top = event.position.top,
                    "rubber band anchored"
                );
                self.rubber_band.pointer_down(event.position);
            }
        }
        self.notify();
    }
}
