//! Clipboard port

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard not available: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Destination for copied text
///
/// The system clipboard adapter lives in the infrastructure layer.
pub trait ClipboardPort: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that refuses every write, for builds without clipboard support
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn copy_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "built without clipboard support".to_string(),
        ))
    }
}
