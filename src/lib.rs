//! nodeboard - selection and drag-coordination core for an interactive node
//! canvas.
//!
//! Users create draggable node boxes, select one or many via click or a
//! rubber-band drag, and move the selected group together. This crate owns
//! the state machine behind that: how pointer and key events become
//! per-node selection state, how the rubber band overlaps node bounding
//! boxes, and how a multi-node drag is coordinated from one pointer offset.
//!
//! Rendering, layout and listener registration belong to the host UI layer.
//! The host feeds [`Canvas`] raw events (`handle_pointer_down` / `_move` /
//! `_up`, `handle_key_down` / `_up`) and measured node extents, observes
//! changes via [`Canvas::observe`], and reads back node positions, active
//! flags and the live rubber-band box to draw.
//!
//! Everything is single-threaded and event-driven: one reconciliation per
//! input event, applied atomically, with no locks and no blocking.

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod node;
pub mod rubber_band;
pub mod subscription;

pub use canvas::{Canvas, NodeView};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{BoundingBox, Extent, Pos, PositiveBox};
pub use input::{KeyCode, KeyEvent, Modifiers, ModifierTracker, PointerEvent, PointerTarget};
pub use node::{Node, NodeId};
pub use rubber_band::RubberBand;
pub use subscription::Subscription;
