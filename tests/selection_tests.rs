//! Rectangular range selection tests.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use gridedit::grid::GridState;
use gridedit::types::Selection;

#[test]
fn test_contains_matches_inclusive_bounds() {
    let sel = Selection {
        start_row: 1,
        start_col: 2,
        end_row: 3,
        end_col: 2,
    };

    assert!(sel.contains(1, 2));
    assert!(sel.contains(2, 2));
    assert!(sel.contains(3, 2));

    assert!(!sel.contains(0, 2));
    assert!(!sel.contains(4, 2));
    assert!(!sel.contains(2, 1));
}

#[test]
fn test_between_normalizes_any_corner_order() {
    let expected = Selection {
        start_row: 1,
        start_col: 2,
        end_row: 3,
        end_col: 4,
    };

    assert_eq!(Selection::between((1, 2), (3, 4)), expected);
    assert_eq!(Selection::between((3, 4), (1, 2)), expected);
    assert_eq!(Selection::between((1, 4), (3, 2)), expected);
    assert_eq!(Selection::between((3, 2), (1, 4)), expected);
}

#[test]
fn test_single_is_one_cell() {
    let sel = Selection::single(2, 5);
    assert!(sel.is_single_cell());
    assert!(sel.contains(2, 5));
    assert!(!sel.contains(2, 4));
}

#[test]
fn test_grid_is_selected_without_selection_is_false() {
    let grid = GridState::new(4, 4);
    assert_eq!(grid.selection(), None);
    assert!(!grid.is_selected(0, 0));
}

#[test]
fn test_new_selection_replaces_the_previous_one() {
    let mut grid = GridState::new(6, 6);
    grid.set_selection(Selection::between((0, 0), (2, 2)));
    grid.set_selection(Selection::single(5, 5));

    assert!(grid.is_selected(5, 5));
    assert!(!grid.is_selected(1, 1));
}

#[test]
fn test_insertion_clears_the_selection() {
    let mut grid = GridState::new(4, 4);

    grid.set_selection(Selection::between((1, 1), (2, 2)));
    grid.insert_row_at(0);
    assert_eq!(grid.selection(), None);

    grid.set_selection(Selection::between((1, 1), (2, 2)));
    grid.insert_col_at(3);
    assert_eq!(grid.selection(), None);
}
