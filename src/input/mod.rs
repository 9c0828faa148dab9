//! Input handling for the canvas.
//!
//! The host delivers raw pointer and key events; the handlers in this module
//! interpret them against the current session state and apply exactly one
//! selection reconciliation per event.
//!
//! ## Modules
//!
//! - `events` - Raw event types as delivered by the host
//! - `modifiers` - The shared, authoritative modifier-key tracker
//! - `mouse_down` - Press routing (node press vs. rubber-band anchor)
//! - `mouse_move` - First-move detection, group drag, rubber-band growth
//! - `mouse_up` - Release reports and rubber-band finalization
//! - `keys` - Modifier sync plus the spawn/delete keys

pub mod events;
mod keys;
mod modifiers;
mod mouse_down;
mod mouse_move;
mod mouse_up;

pub use events::{KeyCode, KeyEvent, Modifiers, PointerEvent, PointerTarget};
pub use modifiers::ModifierTracker;
