//! Data types for the grid widget.

mod format;
mod options;
mod selection;

pub use format::*;
pub use options::*;
pub use selection::*;
