//! Canvas module - the session controller that owns everything on the board.
//!
//! Organized into submodules:
//! - `state` - The `Canvas` struct definition, accessors and observer API
//! - `nodes` - Node lifecycle: spawn, delete, extent reporting
//! - `reconcile` - The selection-reconciliation rules, one atomic update per
//!   input event
//!
//! The pointer/key entry points (`handle_pointer_down` and friends) live in
//! [`crate::input`] as `impl Canvas` blocks, next to the event types they
//! consume.

mod nodes;
mod reconcile;
mod state;

pub use state::{Canvas, NodeView};
