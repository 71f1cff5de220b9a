//! Clipboard adapters
//!
//! The system clipboard is behind the `clipboard` feature; without it
//! [`default_clipboard`] returns an adapter that reports the clipboard as
//! unavailable.

#[cfg(feature = "clipboard")]
mod system;

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

use quotebox_application::ClipboardPort;
use std::sync::Arc;

/// The best clipboard this build supports
pub fn default_clipboard() -> Arc<dyn ClipboardPort> {
    #[cfg(feature = "clipboard")]
    {
        Arc::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Arc::new(quotebox_application::NoClipboard)
    }
}
