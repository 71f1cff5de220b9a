//! Application layer for quotebox
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_EXPORT_TITLE, ExportParams};
pub use ports::{
    clipboard::{ClipboardError, ClipboardPort, NoClipboard},
    export_sink::{ExportSink, ExportSinkError},
    progress::{LoadProgressNotifier, NoProgress},
    quote_source::{QuoteSource, SourceError},
};
pub use use_cases::copy_quote::{CopiedContent, CopyQuoteError, CopyQuoteUseCase};
pub use use_cases::export_quotes::{ExportError, ExportOutput, ExportQuotesUseCase};
pub use use_cases::load_quotes::{LoadQuotesError, LoadQuotesOutput, LoadQuotesUseCase};
pub use use_cases::pick_quote::{PickQuoteError, PickQuoteUseCase};
