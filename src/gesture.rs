//! Pointer-drag gestures: rectangular range selection and header resize.
//!
//! A pure state machine over grid-surface coordinates (container-relative,
//! scroll-adjusted pixels). The wasm event handlers and the native test
//! harness both drive it; listeners stay registered for the widget's lifetime
//! and are gated by the presence of a [`Drag`], so a gesture that never sees
//! its release event cannot leak a handler.

use crate::layout::{GridLayout, MIN_COL_WIDTH, MIN_ROW_HEIGHT};
use crate::types::Selection;

/// Axis being resized during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAxis {
    Col,
    Row,
}

/// An in-flight pointer drag. One gesture resizes exactly one row or column,
/// or grows exactly one selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag {
    /// Range selection anchored at the cell that took the press.
    Select { anchor: (u32, u32) },
    /// Header resize, capturing the press position and the size at press time.
    Resize {
        axis: ResizeAxis,
        index: u32,
        start_pos: f32,
        start_size: f32,
    },
}

/// What a pointer move did to the widget state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// The selection rectangle changed.
    Selection(Selection),
    /// A row or column size changed.
    Layout,
    /// The position resolved to nothing actionable.
    Ignored,
}

impl Drag {
    /// Begin a selection drag with its initial 1x1 rectangle.
    pub fn begin_select(row: u32, col: u32) -> (Self, Selection) {
        (
            Drag::Select { anchor: (row, col) },
            Selection::single(row, col),
        )
    }

    /// Begin a resize drag against the axis' current size.
    pub fn begin_resize(axis: ResizeAxis, index: u32, start_pos: f32, layout: &GridLayout) -> Self {
        let start_size = match axis {
            ResizeAxis::Col => layout.col_width(index),
            ResizeAxis::Row => layout.row_height(index),
        };
        Drag::Resize {
            axis,
            index,
            start_pos,
            start_size,
        }
    }

    /// Apply a pointer move at surface position `(x, y)`.
    ///
    /// Selection drags recompute the normalized box between the anchor and
    /// the cell under the pointer, ignoring positions that resolve to no
    /// cell. Resize drags apply the clamped size to the layout.
    pub fn apply_move(&self, layout: &mut GridLayout, x: f32, y: f32) -> DragEffect {
        match *self {
            Drag::Select { anchor } => {
                let (Some(row), Some(col)) = (layout.row_at_y(y), layout.col_at_x(x)) else {
                    return DragEffect::Ignored;
                };
                DragEffect::Selection(Selection::between(anchor, (row, col)))
            }
            Drag::Resize {
                axis,
                index,
                start_pos,
                start_size,
            } => {
                let current_pos = match axis {
                    ResizeAxis::Col => x,
                    ResizeAxis::Row => y,
                };
                let size = resized(axis, start_size, start_pos, current_pos);
                match axis {
                    ResizeAxis::Col => layout.set_col_width(index, size),
                    ResizeAxis::Row => layout.set_row_height(index, size),
                }
                DragEffect::Layout
            }
        }
    }
}

/// The size a resize drag reaches at `current_pos`, never below the floor.
pub fn resized(axis: ResizeAxis, start_size: f32, start_pos: f32, current_pos: f32) -> f32 {
    let floor = match axis {
        ResizeAxis::Col => MIN_COL_WIDTH,
        ResizeAxis::Row => MIN_ROW_HEIGHT,
    };
    floor.max(start_size + (current_pos - start_pos))
}
