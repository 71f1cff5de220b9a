//! System clipboard via `arboard`

use quotebox_application::{ClipboardError, ClipboardPort};
use tracing::debug;

/// Writes to the desktop clipboard
///
/// A fresh `arboard::Clipboard` handle is opened per copy, so a missing
/// display server only fails the copy that needed it.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardPort for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        debug!("Wrote {} bytes to clipboard", text.len());
        Ok(())
    }
}
