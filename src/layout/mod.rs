//! Layout engine for the grid surface.
//!
//! This module handles:
//! - Column widths and row heights with their minimum floors
//! - Prefix-sum position tables rebuilt on every mutation
//! - Binary search for cell lookup at surface coordinates

mod grid_layout;

pub use grid_layout::{
    CellRect, GridLayout, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT, MIN_COL_WIDTH, MIN_ROW_HEIGHT,
};
