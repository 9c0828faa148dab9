//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Everything drives the canvas through its public input-event API, the same
//! way a host UI layer would.

use nodeboard::{
    Canvas, Extent, KeyCode, KeyEvent, Modifiers, NodeId, PointerEvent, Pos,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once; respects `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn pos(left: f32, top: f32) -> Pos {
    Pos::new(left, top)
}

// ============================================================================
// TestCanvasBuilder
// ============================================================================

/// Builder for canvases pre-populated with nodes.
///
/// Nodes are spawned through the real input path (cursor move + Space) and
/// measured through `set_node_extent`, so the canvas ends up in a state a
/// host could actually produce.
///
/// # Example
/// ```ignore
/// let (canvas, ids) = TestCanvasBuilder::new()
///     .with_node((10.0, 10.0), (40.0, 40.0))
///     .with_node((200.0, 200.0), (50.0, 50.0))
///     .build();
/// ```
pub struct TestCanvasBuilder {
    nodes: Vec<((f32, f32), Option<(f32, f32)>)>,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        init_tracing();
        Self { nodes: Vec::new() }
    }

    /// Add a node at `position` with the given measured size.
    pub fn with_node(mut self, position: (f32, f32), size: (f32, f32)) -> Self {
        self.nodes.push((position, Some(size)));
        self
    }

    /// Add a node the host has not measured yet.
    pub fn with_unmeasured_node(mut self, position: (f32, f32)) -> Self {
        self.nodes.push((position, None));
        self
    }

    /// Add `count` measured 40x40 nodes spaced 100 apart on one row.
    pub fn with_n_nodes(mut self, count: usize) -> Self {
        for i in 0..count {
            self.nodes.push(((i as f32 * 100.0, 0.0), Some((40.0, 40.0))));
        }
        self
    }

    /// Build the canvas. When every node is measured the selection is cleared
    /// afterwards with a background click; with unmeasured nodes present the
    /// last spawned node stays selected (the clearing click would abort on
    /// the measurement race, exactly as in production).
    pub fn build(self) -> (Canvas, Vec<NodeId>) {
        let mut canvas = Canvas::new();
        let mut ids = Vec::new();
        let all_measured = self.nodes.iter().all(|(_, size)| size.is_some());

        for ((left, top), size) in self.nodes {
            move_to(&mut canvas, pos(left, top));
            spawn_key(&mut canvas);
            let id = canvas.nodes().last().expect("node just spawned").id;
            if let Some((width, height)) = size {
                canvas
                    .set_node_extent(id, Extent::new(width, height))
                    .expect("node just spawned");
            }
            ids.push(id);
        }

        if all_measured && !ids.is_empty() {
            click_canvas(&mut canvas, pos(-10_000.0, -10_000.0));
            assert_eq!(canvas.active_count(), 0, "builder should start deselected");
        }

        (canvas, ids)
    }
}

// ============================================================================
// Event-driving helpers
// ============================================================================

pub fn press_node(canvas: &mut Canvas, id: NodeId, at: Pos) {
    canvas.handle_pointer_down(&PointerEvent::on_node(id, at));
}

pub fn press_canvas(canvas: &mut Canvas, at: Pos) {
    canvas.handle_pointer_down(&PointerEvent::on_canvas(at));
}

pub fn move_to(canvas: &mut Canvas, at: Pos) {
    canvas.handle_pointer_move(&PointerEvent::on_canvas(at));
}

pub fn release(canvas: &mut Canvas, at: Pos) {
    canvas.handle_pointer_up(&PointerEvent::on_canvas(at));
}

/// Press and release a node without any movement in between.
pub fn click_node(canvas: &mut Canvas, id: NodeId, at: Pos) {
    press_node(canvas, id, at);
    release(canvas, at);
}

/// Press and release the background without movement (deselects everything
/// when no modifier is held).
pub fn click_canvas(canvas: &mut Canvas, at: Pos) {
    press_canvas(canvas, at);
    release(canvas, at);
}

/// Drag from a node press point to `to` in one move step.
pub fn drag_node(canvas: &mut Canvas, id: NodeId, from: Pos, to: Pos) {
    press_node(canvas, id, from);
    move_to(canvas, to);
    release(canvas, to);
}

/// Draw a rubber band across the background.
pub fn rubber_band(canvas: &mut Canvas, from: Pos, to: Pos) {
    press_canvas(canvas, from);
    move_to(canvas, to);
    release(canvas, to);
}

pub fn shift_down(canvas: &mut Canvas) {
    canvas.handle_key_down(&KeyEvent::new(KeyCode::Shift, Modifiers::shift()));
}

pub fn shift_up(canvas: &mut Canvas) {
    canvas.handle_key_up(&KeyEvent::new(KeyCode::Shift, Modifiers::default()));
}

pub fn spawn_key(canvas: &mut Canvas) {
    canvas.handle_key_down(&KeyEvent::new(KeyCode::Space, Modifiers::default()));
}

pub fn delete_key(canvas: &mut Canvas) {
    canvas.handle_key_down(&KeyEvent::new(KeyCode::Delete, Modifiers::default()));
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that exactly `expected` (in any order) is the active set.
pub fn assert_active(canvas: &Canvas, expected: &[NodeId]) {
    let mut active = canvas.active_ids();
    active.sort();
    let mut expected: Vec<NodeId> = expected.to_vec();
    expected.sort();
    assert_eq!(active, expected, "active set mismatch");
}

pub fn node_position(canvas: &Canvas, id: NodeId) -> Pos {
    canvas.node(id).expect("node exists").position()
}
