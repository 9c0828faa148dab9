//! Keyboard handling - modifier tracking, spawn and delete.

use crate::canvas::Canvas;
use crate::input::events::{KeyCode, KeyEvent};

impl Canvas {
    /// Key pressed. Every key event refreshes the shared modifier tracker;
    /// Space spawns a node and Delete/Backspace removes the active set.
    pub fn handle_key_down(&mut self, event: &KeyEvent) {
        self.modifiers.sync(event.modifiers);

        match event.code {
            KeyCode::Space => {
                self.spawn();
            }
            KeyCode::Delete | KeyCode::Backspace => {
                self.delete_active();
            }
            KeyCode::Shift | KeyCode::Other => {}
        }
    }

    /// Key released. Only refreshes the modifier tracker.
    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        self.modifiers.sync(event.modifiers);
    }
}
