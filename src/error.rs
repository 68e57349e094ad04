//! Structured error types for gridedit.
//!
//! Construction and configuration are the only fallible paths; everything
//! downstream degrades silently to a safe default instead of erroring.

/// All errors that can occur while building or configuring the widget.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A DOM operation failed (element creation, attachment).
    #[error("DOM error: {0}")]
    Dom(String),

    /// The options object could not be deserialized.
    #[error("Invalid options: {0}")]
    Config(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
