//! Infrastructure layer for quotebox
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clipboard;
pub mod config;
pub mod export;
pub mod sources;

// Re-export commonly used types
pub use clipboard::default_clipboard;
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileExportConfig, FileOutputConfig,
    FileReplConfig, FileSourceConfig,
};
pub use export::TxtFileExporter;
#[cfg(feature = "http-source")]
pub use sources::HttpQuoteSource;
pub use sources::{FileQuoteSource, StaticQuoteSource};
