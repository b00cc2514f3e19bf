use super::*;
use crate::draw::Shape;
use crate::draw::color::{BLUE, GREEN, YELLOW};
use crate::input::ShapeKind;

fn create_test_surface() -> DrawingSurface {
    let mut surface = DrawingSurface::new();
    surface.initialize(200, 150);
    surface
}

fn drag_out(surface: &mut DrawingSurface, from: (f64, f64), to: (f64, f64), square: bool) {
    surface.begin_interaction(from.0, from.1);
    surface.update_interaction(to.0, to.1, square);
    surface.end_interaction();
}

fn pixels(surface: &mut DrawingSurface) -> Vec<u8> {
    surface
        .snapshot_pixels()
        .expect("surface should have a render target")
}

#[test]
fn rectangle_drag_commits_with_stock_colors() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (50.0, 50.0), (120.0, 90.0), false);

    assert_eq!(
        surface.shapes(),
        &[Shape::Rectangle {
            x: 50.0,
            y: 50.0,
            width: 70.0,
            height: 40.0,
            border: YELLOW,
            fill: YELLOW.with_alpha(0.3),
        }]
    );
    assert_eq!(surface.interaction(), Interaction::Idle);
}

#[test]
fn circle_radius_comes_from_horizontal_drag() {
    let mut surface = create_test_surface();
    surface.set_shape_kind(ShapeKind::Circle);
    drag_out(&mut surface, (30.0, 30.0), (60.0, 30.0), false);

    assert_eq!(surface.shapes().len(), 1);
    match &surface.shapes()[0] {
        Shape::Circle {
            x,
            y,
            radius,
            border,
            fill,
        } => {
            assert_eq!((*x, *y, *radius), (30.0, 30.0, 30.0));
            assert_eq!(*border, BLUE);
            assert_eq!(fill.to_string(), "rgba(0, 0, 255, 0.3)");
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn line_keeps_drag_direction() {
    let mut surface = create_test_surface();
    surface.set_shape_kind(ShapeKind::Line);
    drag_out(&mut surface, (100.0, 80.0), (40.0, 20.0), false);

    match &surface.shapes()[0] {
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            border,
            ..
        } => {
            assert_eq!((*x1, *y1, *x2, *y2), (100.0, 80.0, 40.0, 20.0));
            assert_eq!(*border, GREEN);
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn origin_anchored_shape_is_discarded() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (0.0, 0.0), (10.0, 10.0), false);

    assert!(surface.shapes().is_empty());
    assert_eq!(surface.interaction(), Interaction::Idle);
}

#[test]
fn consecutive_duplicate_is_discarded() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (40.0, 40.0), false);
    drag_out(&mut surface, (20.0, 20.0), (90.0, 70.0), false);

    assert_eq!(surface.shapes().len(), 1);
    assert!(matches!(
        surface.shapes()[0],
        Shape::Rectangle { width, .. } if width == 20.0
    ));
}

#[test]
fn square_constraint_equalizes_rectangle_sides() {
    // (press, pointer, expected side) for each drag direction
    let drags = [
        ((10.0, 10.0), (80.0, 40.0), 30.0),
        ((50.0, 100.0), (120.0, 70.0), 30.0),
        ((80.0, 40.0), (20.0, 90.0), 50.0),
        ((150.0, 120.0), (90.0, 70.0), 50.0),
    ];

    for (from, to, side) in drags {
        let mut surface = create_test_surface();
        drag_out(&mut surface, from, to, true);

        match &surface.shapes()[0] {
            Shape::Rectangle { width, height, .. } => {
                assert_eq!(width, height, "drag {from:?} -> {to:?}");
                assert_eq!(*width, side, "drag {from:?} -> {to:?}");
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }
}

#[test]
fn square_constraint_leaves_lines_at_pointer() {
    let mut surface = create_test_surface();
    surface.set_shape_kind(ShapeKind::Line);
    drag_out(&mut surface, (20.0, 30.0), (110.0, 50.0), true);

    assert!(matches!(
        surface.shapes()[0],
        Shape::Line { x1, y1, x2, y2, .. }
            if (x1, y1, x2, y2) == (20.0, 30.0, 110.0, 50.0)
    ));
}

#[test]
fn square_constraint_applies_to_circle_radius() {
    let mut surface = create_test_surface();
    surface.set_shape_kind(ShapeKind::Circle);
    drag_out(&mut surface, (60.0, 60.0), (100.0, 70.0), true);

    assert!(matches!(
        surface.shapes()[0],
        Shape::Circle { radius, .. } if radius == 10.0
    ));
}

#[test]
fn commit_uses_last_motion_not_release_point() {
    let mut surface = create_test_surface();
    surface.begin_interaction(10.0, 10.0);
    surface.update_interaction(50.0, 30.0, false);
    surface.update_interaction(30.0, 60.0, false);
    surface.end_interaction();

    assert!(matches!(
        surface.shapes()[0],
        Shape::Rectangle { width, height, .. } if (width, height) == (20.0, 50.0)
    ));
}

#[test]
fn click_without_motion_commits_zero_sized_shape() {
    let mut surface = create_test_surface();
    surface.begin_interaction(15.0, 25.0);
    surface.end_interaction();

    assert!(matches!(
        surface.shapes()[0],
        Shape::Rectangle { x, y, width, height, .. }
            if (x, y, width, height) == (15.0, 25.0, 0.0, 0.0)
    ));
}

#[test]
fn motion_while_idle_is_ignored() {
    let mut surface = create_test_surface();
    let blank = pixels(&mut surface);

    surface.update_interaction(50.0, 50.0, false);
    surface.end_interaction();

    assert_eq!(surface.interaction(), Interaction::Idle);
    assert!(surface.shapes().is_empty());
    assert_eq!(pixels(&mut surface), blank);
}

#[test]
fn preview_is_drawn_but_not_committed() {
    let mut surface = create_test_surface();
    let blank = pixels(&mut surface);

    surface.begin_interaction(20.0, 20.0);
    surface.update_interaction(80.0, 70.0, false);

    assert!(surface.shapes().is_empty());
    assert!(surface.candidate_shape().is_some());
    assert_ne!(pixels(&mut surface), blank);
    assert!(matches!(
        surface.interaction(),
        Interaction::Drawing { extent_x, extent_y, .. } if (extent_x, extent_y) == (60.0, 50.0)
    ));
}

#[test]
fn discarded_preview_is_erased_on_release() {
    let mut surface = create_test_surface();
    let blank = pixels(&mut surface);

    surface.begin_interaction(0.0, 0.0);
    surface.update_interaction(60.0, 60.0, false);
    surface.end_interaction();

    assert!(surface.candidate_shape().is_none());
    assert_eq!(pixels(&mut surface), blank);
}

#[test]
fn shapes_keep_colors_after_kind_change() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (5.0, 5.0), (25.0, 25.0), false);
    surface.set_shape_kind(ShapeKind::Circle);

    assert_eq!(surface.shapes()[0].border(), YELLOW);
    assert_eq!(surface.style().border, BLUE);
}

#[test]
fn undo_then_replay_matches_direct_drawing() {
    let mut with_undo = create_test_surface();
    drag_out(&mut with_undo, (20.0, 20.0), (90.0, 60.0), false);
    with_undo.set_shape_kind(ShapeKind::Circle);
    drag_out(&mut with_undo, (120.0, 80.0), (150.0, 80.0), false);
    with_undo.set_shape_kind(ShapeKind::Line);
    drag_out(&mut with_undo, (10.0, 140.0), (190.0, 10.0), false);
    with_undo.undo();

    let mut direct = create_test_surface();
    drag_out(&mut direct, (20.0, 20.0), (90.0, 60.0), false);
    direct.set_shape_kind(ShapeKind::Circle);
    drag_out(&mut direct, (120.0, 80.0), (150.0, 80.0), false);

    assert_eq!(with_undo.shapes(), direct.shapes());
    assert_eq!(pixels(&mut with_undo), pixels(&mut direct));
}

#[test]
fn undo_on_empty_surface_is_noop() {
    let mut surface = create_test_surface();
    let blank = pixels(&mut surface);
    surface.undo();
    assert!(surface.shapes().is_empty());
    assert_eq!(pixels(&mut surface), blank);
}

#[test]
fn reset_clears_shapes_and_pixels_but_keeps_style() {
    let mut surface = create_test_surface();
    let blank = pixels(&mut surface);
    surface.set_shape_kind(ShapeKind::Line);
    drag_out(&mut surface, (10.0, 10.0), (100.0, 100.0), false);
    drag_out(&mut surface, (30.0, 10.0), (100.0, 140.0), false);
    assert_ne!(pixels(&mut surface), blank);

    surface.reset();

    assert!(surface.shapes().is_empty());
    assert_eq!(pixels(&mut surface), blank);
    assert_eq!(surface.style().shape_kind, ShapeKind::Line);
}

#[test]
fn drag_translates_target_continuously() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (60.0, 50.0), false);

    surface.begin_drag(0, 30.0, 30.0);
    surface.update_interaction(35.0, 32.0, false);
    assert_eq!(surface.shapes()[0].anchor(), (25.0, 22.0));
    surface.update_interaction(45.0, 42.0, false);
    assert_eq!(surface.shapes()[0].anchor(), (35.0, 32.0));
    surface.end_interaction();

    assert_eq!(surface.interaction(), Interaction::Idle);
    assert_eq!(surface.shapes().len(), 1);
    assert!(matches!(
        surface.shapes()[0],
        Shape::Rectangle { width, height, .. } if (width, height) == (40.0, 30.0)
    ));
}

#[test]
fn dragged_pixels_match_shape_drawn_in_place() {
    let mut moved = create_test_surface();
    drag_out(&mut moved, (20.0, 20.0), (60.0, 50.0), false);
    moved.begin_drag(0, 25.0, 25.0);
    moved.update_interaction(75.0, 85.0, false);
    moved.end_interaction();

    let mut direct = create_test_surface();
    drag_out(&mut direct, (70.0, 80.0), (110.0, 110.0), false);

    assert_eq!(pixels(&mut moved), pixels(&mut direct));
}

#[test]
fn press_during_drag_is_ignored() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (60.0, 50.0), false);
    surface.begin_drag(0, 30.0, 30.0);

    surface.begin_interaction(100.0, 100.0);

    assert!(matches!(
        surface.interaction(),
        Interaction::Dragging { target_index: 0, .. }
    ));
    surface.end_interaction();
    assert_eq!(surface.shapes().len(), 1);
}

#[test]
fn begin_drag_requires_idle_and_existing_shape() {
    let mut surface = create_test_surface();
    surface.begin_drag(0, 10.0, 10.0);
    assert_eq!(surface.interaction(), Interaction::Idle);

    drag_out(&mut surface, (20.0, 20.0), (60.0, 50.0), false);
    surface.begin_interaction(5.0, 5.0);
    surface.begin_drag(0, 30.0, 30.0);
    assert!(matches!(surface.interaction(), Interaction::Drawing { .. }));
}

#[test]
fn begin_drag_at_picks_last_drawn_shape() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (80.0, 80.0), false);
    surface.set_shape_kind(ShapeKind::Circle);
    drag_out(&mut surface, (60.0, 60.0), (80.0, 60.0), false);

    assert_eq!(surface.shape_at(65.0, 65.0), Some(1));
    assert_eq!(surface.shape_at(25.0, 25.0), Some(0));
    assert_eq!(surface.shape_at(190.0, 10.0), None);

    assert!(surface.begin_drag_at(65.0, 65.0));
    assert!(matches!(
        surface.interaction(),
        Interaction::Dragging { target_index: 1, .. }
    ));
    surface.end_interaction();

    assert!(!surface.begin_drag_at(190.0, 10.0));
    assert_eq!(surface.interaction(), Interaction::Idle);
}

#[test]
fn undo_of_drag_target_ends_drag() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (60.0, 50.0), false);
    surface.begin_drag(0, 30.0, 30.0);

    surface.undo();

    assert_eq!(surface.interaction(), Interaction::Idle);
    surface.update_interaction(50.0, 50.0, false);
    assert!(surface.shapes().is_empty());
}

#[test]
fn operations_without_render_target_still_track_shapes() {
    let mut surface = DrawingSurface::new();
    assert!(!surface.has_render_target());

    drag_out(&mut surface, (50.0, 50.0), (120.0, 90.0), false);
    surface.undo();
    drag_out(&mut surface, (10.0, 10.0), (20.0, 20.0), false);

    assert_eq!(surface.shapes().len(), 1);
    assert!(surface.snapshot_pixels().is_none());
    assert_eq!(surface.dimensions(), None);
}

#[test]
fn initialize_again_resizes_and_redraws() {
    let mut surface = create_test_surface();
    drag_out(&mut surface, (20.0, 20.0), (60.0, 50.0), false);

    surface.initialize(100, 80);
    assert_eq!(surface.dimensions(), Some((100, 80)));

    let mut direct = DrawingSurface::new();
    direct.initialize(100, 80);
    drag_out(&mut direct, (20.0, 20.0), (60.0, 50.0), false);
    assert_eq!(pixels(&mut surface), pixels(&mut direct));
}

#[test]
fn zero_sized_initialize_leaves_no_target() {
    let mut surface = create_test_surface();
    surface.initialize(0, 100);
    assert!(!surface.has_render_target());
}

#[test]
fn oversized_initialize_clamps_to_max_edge() {
    let mut surface = create_test_surface();
    surface.initialize(MAX_CANVAS_SIZE + 5000, 10);
    assert_eq!(surface.dimensions(), Some((MAX_CANVAS_SIZE, 10)));
}

#[test]
fn style_setters_ignore_invalid_values() {
    let mut surface = create_test_surface();
    surface.set_stroke_width(5.0);
    surface.set_stroke_width(-1.0);
    surface.set_stroke_width(f64::NAN);
    surface.set_arrowhead_length(0.0);
    surface.set_arrowhead_length(15.0);

    assert_eq!(surface.style().stroke_width, 5.0);
    assert_eq!(surface.style().arrowhead_length, 15.0);
}

#[test]
fn set_shape_kind_resets_palette() {
    let mut surface = create_test_surface();
    for kind in ShapeKind::ALL {
        surface.set_shape_kind(kind);
        let (border, fill) = kind.default_colors();
        assert_eq!(surface.style().shape_kind, kind);
        assert_eq!(surface.style().border, border);
        assert_eq!(surface.style().fill, fill);
    }
}
