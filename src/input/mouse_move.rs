//! Pointer-move handling - first-move detection and group drag.
//!
//! Moves arrive at high frequency, so every branch is an idempotent no-op
//! when its guard is false: an idle canvas pays for one cursor store and one
//! scan of unpressed nodes, and nothing is notified.

use crate::canvas::Canvas;
use crate::input::events::PointerEvent;

impl Canvas {
    /// Track the cursor, grow the rubber band, and move the active set while
    /// a group drag is in progress.
    ///
    /// Moves go to every node, not just the one under the cursor: releases
    /// and drags are window-level concerns in the interaction model, which is
    /// what lets a whole multi-selection follow one pointer.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        self.cursor_pos = event.position;

        let mut changed = self.rubber_band.pointer_move(event.position);

        // First-move pass: a pressed node that has not moved yet flips its
        // private drag flag exactly once and the session reacts before the
        // movement pass below reads the group-drag flag.
        let mut first_moves = false;
        for node in &mut self.nodes {
            first_moves |= node.begin_drag();
        }
        if first_moves {
            self.reconcile_first_move();
            changed = true;
        }

        // Movement pass: every active node follows the cursor through its
        // own pre-computed offset, so the group moves rigidly.
        if self.group_drag {
            for node in &mut self.nodes {
                if self.selected.contains(&node.id()) {
                    node.drag_to(event.position);
                    changed = true;
                }
            }
        }

        if changed {
            self.notify();
        }
    }
}
