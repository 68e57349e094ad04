//! Cell store and row/column insertion tests.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridedit::grid::GridState;

/// Fill every cell with a marker naming its original coordinate.
fn marked_grid(rows: u32, cols: u32) -> GridState {
    let mut grid = GridState::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            grid.set_cell(row, col, format!("r{row}c{col}"));
        }
    }
    grid
}

// ================================================================
// Cell store
// ================================================================

#[test]
fn test_unwritten_cells_read_empty() {
    let grid = GridState::new(4, 4);
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(grid.cell(row, col), "");
        }
    }
}

#[test]
fn test_set_and_read_back() {
    let mut grid = GridState::new(4, 4);
    grid.set_cell(2, 3, "hello");
    assert_eq!(grid.cell(2, 3), "hello");
    assert_eq!(grid.cell(3, 2), "");
}

#[test]
fn test_writing_empty_unsets_the_cell() {
    let mut grid = GridState::new(4, 4);
    grid.set_cell(1, 1, "value");
    grid.set_cell(1, 1, "");
    assert_eq!(grid.cell(1, 1), "");
}

#[test]
fn test_out_of_bounds_writes_are_ignored() {
    let mut grid = GridState::new(4, 4);
    grid.set_cell(4, 0, "beyond");
    grid.set_cell(0, 4, "beyond");
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(grid.cell(row, col), "");
        }
    }
}

#[test]
fn test_dimensions_have_a_floor_of_one() {
    let grid = GridState::new(0, 0);
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.cols(), 1);
}

// ================================================================
// Row insertion
// ================================================================

#[test]
fn test_insert_row_shifts_rows_down() {
    let mut grid = marked_grid(3, 2);
    grid.insert_row_at(1);

    assert_eq!(grid.rows(), 4);
    // Rows above the insertion point are unchanged.
    assert_eq!(grid.cell(0, 0), "r0c0");
    assert_eq!(grid.cell(0, 1), "r0c1");
    // The inserted row is empty.
    assert_eq!(grid.cell(1, 0), "");
    assert_eq!(grid.cell(1, 1), "");
    // Rows at or below the index moved down by exactly one.
    assert_eq!(grid.cell(2, 0), "r1c0");
    assert_eq!(grid.cell(2, 1), "r1c1");
    assert_eq!(grid.cell(3, 0), "r2c0");
    assert_eq!(grid.cell(3, 1), "r2c1");
}

#[test]
fn test_insert_row_at_zero_shifts_everything() {
    let mut grid = marked_grid(2, 2);
    grid.insert_row_at(0);
    assert_eq!(grid.cell(0, 0), "");
    assert_eq!(grid.cell(1, 0), "r0c0");
    assert_eq!(grid.cell(2, 1), "r1c1");
}

#[test]
fn test_insert_row_past_the_end_appends() {
    let mut grid = marked_grid(2, 2);
    grid.insert_row_at(99);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cell(0, 0), "r0c0");
    assert_eq!(grid.cell(1, 1), "r1c1");
    assert_eq!(grid.cell(2, 0), "");
}

// ================================================================
// Column insertion
// ================================================================

#[test]
fn test_insert_col_shifts_cols_right() {
    let mut grid = marked_grid(2, 3);
    grid.insert_col_at(1);

    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.cell(0, 0), "r0c0");
    assert_eq!(grid.cell(0, 1), "");
    assert_eq!(grid.cell(1, 1), "");
    assert_eq!(grid.cell(0, 2), "r0c1");
    assert_eq!(grid.cell(1, 3), "r1c2");
}

#[test]
fn test_insert_col_past_the_end_appends() {
    let mut grid = marked_grid(2, 2);
    grid.insert_col_at(99);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.cell(1, 1), "r1c1");
    assert_eq!(grid.cell(0, 2), "");
}

// ================================================================
// Focus bounds
// ================================================================

#[test]
fn test_focus_clamps_into_bounds() {
    let mut grid = GridState::new(3, 3);
    grid.set_focus(99, 99);
    assert_eq!(grid.focus(), (2, 2));
    grid.set_focus(1, 2);
    assert_eq!(grid.focus(), (1, 2));
}

#[test]
fn test_focus_stays_valid_after_insertion() {
    let mut grid = GridState::new(3, 3);
    grid.set_focus(2, 2);
    grid.insert_row_at(0);
    grid.insert_col_at(0);
    let (row, col) = grid.focus();
    assert!(row < grid.rows() && col < grid.cols());
}
