//! Authoritative modifier-key tracker.
//!
//! Exactly one tracker exists per input stream; controllers that care about
//! shift state hold clones of the same handle instead of mirroring the flag
//! into their own fields. Single-threaded, so a shared `Cell` is all that is
//! needed.

use crate::input::events::Modifiers;
use std::cell::Cell;
use std::rc::Rc;

/// Cheaply clonable handle to the shared modifier state. Clones observe the
/// same underlying flags.
#[derive(Debug, Clone, Default)]
pub struct ModifierTracker {
    state: Rc<Cell<Modifiers>>,
}

impl ModifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the modifier state carried by a key event.
    pub fn sync(&self, modifiers: Modifiers) {
        self.state.set(modifiers);
    }

    pub fn shift(&self) -> bool {
        self.state.get().shift
    }
}
