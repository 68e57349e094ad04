//! Keyboard navigation over the focused cell.

use super::GridState;

/// Navigation keys recognized by the focus state machine.
///
/// Any other key is left to the default text-editing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Tab,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value to a navigation key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "Tab" => Some(Self::Tab),
            _ => None,
        }
    }
}

impl GridState {
    /// Move the focused cell and return its new coordinate.
    ///
    /// Arrows move by one cell, clamped at the grid edges (no wraparound).
    /// Tab moves right, wrapping to column 0 of the next row at the last
    /// column and staying on the last row at the end of the grid.
    pub fn navigate(&mut self, key: NavKey) -> (u32, u32) {
        let (row, col) = self.focus();
        let last_row = self.rows().saturating_sub(1);
        let last_col = self.cols().saturating_sub(1);

        let next = match key {
            NavKey::Up => (row.saturating_sub(1), col),
            NavKey::Down => ((row + 1).min(last_row), col),
            NavKey::Left => (row, col.saturating_sub(1)),
            NavKey::Right => (row, (col + 1).min(last_col)),
            NavKey::Tab => {
                if col < last_col {
                    (row, col + 1)
                } else {
                    ((row + 1).min(last_row), 0)
                }
            }
        };

        self.set_focus(next.0, next.1);
        self.focus()
    }
}
