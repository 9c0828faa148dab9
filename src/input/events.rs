//! Raw input events as delivered by the host UI layer.
//!
//! The host owns actual listener registration and hit testing; this crate
//! only sees the distilled result: where the pointer is, what it landed on,
//! and which modifier keys were held.

use crate::geometry::Pos;
use crate::node::NodeId;

/// What a pointer event landed on, as hit-tested by the host.
///
/// `Node(id)` means the node's own surface - not a child control inside it
/// and not the background behind it. Events on anything else should be
/// reported as `Canvas` (background) or simply not forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The empty canvas background.
    Canvas,
    /// A node's own surface.
    Node(NodeId),
}

/// A pointer-down/move/up event.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub position: Pos,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(position: Pos, target: PointerTarget) -> Self {
        Self { position, target }
    }

    /// Event on the canvas background.
    pub fn on_canvas(position: Pos) -> Self {
        Self::new(position, PointerTarget::Canvas)
    }

    /// Event on a node's surface.
    pub fn on_node(id: NodeId, position: Pos) -> Self {
        Self::new(position, PointerTarget::Node(id))
    }
}

/// Modifier-key state carried by every key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self { shift: true }
    }
}

/// Key identity, reduced to the keys this core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Spawns a new node.
    Space,
    /// Deletes the active set.
    Delete,
    /// Alias for Delete.
    Backspace,
    /// Modifier-only event (shift pressed or released by itself).
    Shift,
    /// Anything this core does not act on.
    Other,
}

/// A key-down or key-up event.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }
}
