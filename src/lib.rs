//! gridedit - editable spreadsheet grid for the web
//!
//! Renders an editable, resizable cell grid in the browser via WebAssembly:
//! - Rich-text cells (bold/italic/underline via the platform editing commands)
//! - Rectangular range selection and per-range text sort
//! - Row/column insertion and drag resize with minimum size floors
//! - Keyboard navigation (arrows clamp at the edges, Tab wraps)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridEdit } from 'gridedit';
//! await init();
//! const grid = new GridEdit(container, { rows: 15, cols: 18 });
//! ```

// State modules
pub mod cell_ref;
pub mod error;
pub mod gesture;
pub mod grid;
pub mod layout;
pub mod rich_text;
pub mod types;

// DOM-facing module
pub mod view;

use wasm_bindgen::prelude::*;

// Re-export the main widget struct
pub use view::GridEdit;

pub use types::*;

/// Parse a JSON options document into [`GridOptions`].
///
/// Convenience for hosts that keep widget configuration as JSON.
///
/// # Errors
/// Returns an error if the document is not a valid options object.
pub fn options_from_json(json: &str) -> error::Result<GridOptions> {
    serde_json::from_str(json).map_err(|e| error::GridError::Config(e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
