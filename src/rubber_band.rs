//! Rubber-band selection rectangle controller.
//!
//! ## State transitions
//!
//! ```text
//! Idle   -> Active   (pointer down on the empty canvas background)
//! Active -> Idle     (pointer up - reports the final normalized box)
//! ```
//!
//! The visible dashed rectangle is purely a derived view: hosts read
//! [`RubberBand::view`] and draw it; nothing in the decision logic depends on
//! what is rendered.

use crate::geometry::{Pos, PositiveBox};

/// Tracks a rubber-band drag anchored at a press point. Ephemeral: carries no
/// state worth persisting once the drag ends.
#[derive(Debug, Clone, Default)]
pub struct RubberBand {
    active: bool,
    start: Pos,
    end: Pos,
}

impl RubberBand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Live normalized box while a drag is in progress, for rendering.
    pub fn view(&self) -> Option<PositiveBox> {
        self.active.then(|| PositiveBox::from_corners(self.start, self.end))
    }

    /// Anchor a new drag at the press point.
    pub(crate) fn pointer_down(&mut self, position: Pos) {
        self.active = true;
        self.start = position;
        self.end = position;
    }

    /// Track the cursor. Returns whether anything changed, so high-frequency
    /// moves outside a drag stay free.
    pub(crate) fn pointer_move(&mut self, position: Pos) -> bool {
        if !self.active {
            return false;
        }
        self.end = position;
        true
    }

    /// End the drag. Deactivates and, in the same step, yields the final
    /// normalized box. A release while idle yields nothing.
    pub(crate) fn pointer_up(&mut self) -> Option<PositiveBox> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(PositiveBox::from_corners(self.start, self.end))
    }
}
