//! Per-range text sort over the selected rectangle.

use std::cmp::Ordering;

use super::GridState;
use crate::rich_text::plain_text;

/// Sort direction. Toggles after every invocation on a live selection,
/// starting ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl GridState {
    /// Sort the selected range using Unicode code-point ordering.
    ///
    /// The wasm view passes a locale-aware comparator through
    /// [`GridState::sort_selection_with`] instead.
    pub fn sort_selection(&mut self) -> bool {
        self.sort_selection_with(|a, b| a.cmp(b))
    }

    /// Sort the selected range with a caller-supplied ascending comparator.
    ///
    /// A selection spanning multiple rows sorts each selected column
    /// independently top-to-bottom; a single-row selection sorts the row
    /// left-to-right; a 1x1 selection has no visible effect. Comparison keys
    /// are the cells' plain content (markup stripped); unset cells compare as
    /// the empty string. The moved values keep their full markup.
    ///
    /// Returns `false` (and leaves the direction untouched) when no selection
    /// exists; any live selection toggles the direction for the next call.
    pub fn sort_selection_with<F>(&mut self, mut cmp: F) -> bool
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        let Some(sel) = self.selection() else {
            return false;
        };

        let descending = self.sort_order() == SortOrder::Descending;
        let mut directed = move |a: &str, b: &str| {
            let ord = cmp(a, b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        };

        if sel.spans_rows() {
            // Column-wise: each selected column sorted top-to-bottom.
            for col in sel.start_col..=sel.end_col {
                let mut entries: Vec<(String, String)> = (sel.start_row..=sel.end_row)
                    .map(|row| {
                        let markup = self.cell(row, col).to_string();
                        (plain_text(&markup), markup)
                    })
                    .collect();
                entries.sort_by(|a, b| directed(&a.0, &b.0));
                for (row, (_, markup)) in (sel.start_row..=sel.end_row).zip(entries) {
                    self.set_cell(row, col, markup);
                }
            }
        } else if sel.spans_cols() {
            // Row-wise: the single selected row sorted left-to-right.
            let row = sel.start_row;
            let mut entries: Vec<(String, String)> = (sel.start_col..=sel.end_col)
                .map(|col| {
                    let markup = self.cell(row, col).to_string();
                    (plain_text(&markup), markup)
                })
                .collect();
            entries.sort_by(|a, b| directed(&a.0, &b.0));
            for (col, (_, markup)) in (sel.start_col..=sel.end_col).zip(entries) {
                self.set_cell(row, col, markup);
            }
        }

        self.toggle_sort_order();
        true
    }

    fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }
}
