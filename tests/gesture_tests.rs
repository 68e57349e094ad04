//! Pointer-gesture tests: drag selection and drag resize against the layout.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]

use gridedit::gesture::{resized, Drag, DragEffect, ResizeAxis};
use gridedit::layout::{
    GridLayout, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT, MIN_COL_WIDTH, MIN_ROW_HEIGHT,
};
use gridedit::types::Selection;

/// Surface position of a cell's center with default sizes.
fn center(row: u32, col: u32) -> (f32, f32) {
    (
        col as f32 * DEFAULT_COL_WIDTH + DEFAULT_COL_WIDTH / 2.0,
        row as f32 * DEFAULT_ROW_HEIGHT + DEFAULT_ROW_HEIGHT / 2.0,
    )
}

// ================================================================
// Range selection
// ================================================================

#[test]
fn test_select_drag_starts_as_single_cell() {
    let (_, selection) = Drag::begin_select(2, 3);
    assert_eq!(selection, Selection::single(2, 3));
}

#[test]
fn test_select_drag_normalizes_toward_origin() {
    let mut layout = GridLayout::new(6, 6);
    let (drag, _) = Drag::begin_select(2, 2);

    let (x, y) = center(0, 0);
    let effect = drag.apply_move(&mut layout, x, y);
    assert_eq!(
        effect,
        DragEffect::Selection(Selection::between((0, 0), (2, 2)))
    );
}

#[test]
fn test_select_drag_tracks_the_cell_under_the_pointer() {
    let mut layout = GridLayout::new(6, 6);
    let (drag, _) = Drag::begin_select(1, 1);

    let (x, y) = center(4, 3);
    let effect = drag.apply_move(&mut layout, x, y);
    assert_eq!(
        effect,
        DragEffect::Selection(Selection::between((1, 1), (4, 3)))
    );
}

#[test]
fn test_select_drag_ignores_positions_outside_every_cell() {
    let mut layout = GridLayout::new(3, 3);
    let (drag, _) = Drag::begin_select(0, 0);

    assert_eq!(drag.apply_move(&mut layout, -10.0, 5.0), DragEffect::Ignored);
    assert_eq!(drag.apply_move(&mut layout, 5.0, -10.0), DragEffect::Ignored);

    let past_right_edge = layout.total_width() + 1.0;
    assert_eq!(
        drag.apply_move(&mut layout, past_right_edge, 5.0),
        DragEffect::Ignored
    );
}

// ================================================================
// Resize
// ================================================================

#[test]
fn test_resize_tracks_the_pointer_delta() {
    let mut layout = GridLayout::new(4, 4);
    let drag = Drag::begin_resize(ResizeAxis::Col, 1, 500.0, &layout);

    assert_eq!(drag.apply_move(&mut layout, 530.0, 0.0), DragEffect::Layout);
    assert_eq!(layout.col_width(1), DEFAULT_COL_WIDTH + 30.0);

    assert_eq!(drag.apply_move(&mut layout, 480.0, 0.0), DragEffect::Layout);
    assert_eq!(layout.col_width(1), DEFAULT_COL_WIDTH - 20.0);
}

#[test]
fn test_resize_never_drops_below_the_floor() {
    let mut layout = GridLayout::new(4, 4);

    let drag = Drag::begin_resize(ResizeAxis::Col, 0, 100.0, &layout);
    drag.apply_move(&mut layout, -1.0e6, 0.0);
    assert_eq!(layout.col_width(0), MIN_COL_WIDTH);

    let drag = Drag::begin_resize(ResizeAxis::Row, 2, 100.0, &layout);
    drag.apply_move(&mut layout, 0.0, -1.0e6);
    assert_eq!(layout.row_height(2), MIN_ROW_HEIGHT);
}

#[test]
fn test_resize_touches_only_its_own_axis_entry() {
    let mut layout = GridLayout::new(4, 4);
    let drag = Drag::begin_resize(ResizeAxis::Row, 1, 0.0, &layout);
    drag.apply_move(&mut layout, 0.0, 25.0);

    assert_eq!(layout.row_height(1), DEFAULT_ROW_HEIGHT + 25.0);
    assert_eq!(layout.row_height(0), DEFAULT_ROW_HEIGHT);
    assert_eq!(layout.row_height(2), DEFAULT_ROW_HEIGHT);
    assert_eq!(layout.col_width(1), DEFAULT_COL_WIDTH);
}

#[test]
fn test_resized_clamps_for_any_delta() {
    assert_eq!(
        resized(ResizeAxis::Col, DEFAULT_COL_WIDTH, 100.0, -1.0e9),
        MIN_COL_WIDTH
    );
    assert_eq!(
        resized(ResizeAxis::Row, DEFAULT_ROW_HEIGHT, 0.0, -1.0e9),
        MIN_ROW_HEIGHT
    );
    assert_eq!(
        resized(ResizeAxis::Col, DEFAULT_COL_WIDTH, 100.0, 160.0),
        DEFAULT_COL_WIDTH + 60.0
    );
}
