//! Widget construction options.

use std::collections::HashMap;

use serde::Deserialize;

use crate::cell_ref::parse_cell_ref;

/// Initial row count when none is given.
pub const DEFAULT_ROWS: u32 = 15;

/// Initial column count when none is given.
pub const DEFAULT_COLS: u32 = 18;

/// Recognized construction options.
///
/// Deserialized from the host's options object (or JSON). Missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    /// Initial row count.
    pub rows: u32,
    /// Initial column count.
    pub cols: u32,
    /// Pre-populated cell content, keyed by cell reference ("A1", "C4").
    pub initial_data: HashMap<String, String>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_data: HashMap::new(),
        }
    }
}

impl GridOptions {
    /// Resolve `initial_data` into coordinates and content.
    ///
    /// Unparseable keys and references outside the grid bounds are dropped.
    pub fn resolved_cells(&self) -> Vec<((u32, u32), String)> {
        self.initial_data
            .iter()
            .filter_map(|(key, content)| {
                let (row, col) = parse_cell_ref(key)?;
                if row < self.rows && col < self.cols {
                    Some(((row, col), content.clone()))
                } else {
                    None
                }
            })
            .collect()
    }
}
