//! Bounding-box queries, extent reporting and the shared modifier tracker.

use crate::helpers::*;
use nodeboard::{BoundingBox, Canvas, CanvasError, Extent, ModifierTracker, NodeId};
use pretty_assertions::assert_eq;

#[test]
fn test_bounding_box_from_position_and_extent() {
    let (canvas, ids) = TestCanvasBuilder::new()
        .with_node((10.0, 20.0), (30.0, 40.0))
        .build();

    assert_eq!(
        canvas.bounding_box(ids[0]).unwrap(),
        BoundingBox::new(10.0, 20.0, 40.0, 60.0)
    );
}

#[test]
fn test_bounding_box_unmeasured_node() {
    let (canvas, ids) = TestCanvasBuilder::new()
        .with_unmeasured_node((10.0, 20.0))
        .build();

    assert_eq!(
        canvas.bounding_box(ids[0]),
        Err(CanvasError::UnmeasuredNode(ids[0]))
    );
}

#[test]
fn test_bounding_box_unknown_node() {
    init_tracing();
    let canvas = Canvas::new();
    assert_eq!(
        canvas.bounding_box(NodeId(99)),
        Err(CanvasError::UnknownNode(NodeId(99)))
    );
}

#[test]
fn test_remeasure_updates_bounding_box() {
    let (mut canvas, ids) = TestCanvasBuilder::new()
        .with_node((0.0, 0.0), (40.0, 40.0))
        .build();

    canvas.set_node_extent(ids[0], Extent::new(80.0, 20.0)).unwrap();
    assert_eq!(
        canvas.bounding_box(ids[0]).unwrap(),
        BoundingBox::new(0.0, 0.0, 80.0, 20.0)
    );
}

#[test]
fn test_set_extent_for_unknown_node_errors() {
    init_tracing();
    let mut canvas = Canvas::new();
    assert_eq!(
        canvas.set_node_extent(NodeId(7), Extent::new(10.0, 10.0)),
        Err(CanvasError::UnknownNode(NodeId(7)))
    );
}

#[test]
fn test_rubber_band_view_tracks_drag() {
    let (mut canvas, _ids) = TestCanvasBuilder::new().with_n_nodes(1).build();

    assert!(canvas.rubber_band().is_none());

    press_canvas(&mut canvas, pos(100.0, 100.0));
    move_to(&mut canvas, pos(40.0, 170.0));
    let band = canvas.rubber_band().expect("band active during drag");
    assert_eq!((band.left, band.top), (40.0, 100.0));
    assert_eq!((band.width, band.height), (60.0, 70.0));

    release(&mut canvas, pos(40.0, 170.0));
    assert!(canvas.rubber_band().is_none());
}

#[test]
fn test_key_events_drive_shared_modifier_tracker() {
    init_tracing();
    let tracker = ModifierTracker::new();
    let mut canvas = Canvas::with_modifiers(tracker.clone());

    assert!(!tracker.shift());
    shift_down(&mut canvas);
    assert!(tracker.shift());
    assert!(canvas.modifiers().shift());
    shift_up(&mut canvas);
    assert!(!tracker.shift());
}

#[test]
fn test_one_tracker_serves_two_canvases() {
    init_tracing();
    let tracker = ModifierTracker::new();
    let mut left = Canvas::with_modifiers(tracker.clone());
    let right = Canvas::with_modifiers(tracker);

    shift_down(&mut left);
    // The other canvas observes the same authoritative state; nothing is
    // mirrored per-controller.
    assert!(right.modifiers().shift());
}
