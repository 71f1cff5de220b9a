//! Quote source port
//!
//! Defines how the application obtains the raw, newline-delimited text that
//! is parsed into quotes.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised when a source cannot supply text
///
/// Every variant means "source unavailable". None of them is raised for a
/// source that was read successfully but holds no quotes.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {location}: {message}")]
    Io { location: String, message: String },

    #[error("HTTP error: {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Source is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Source too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },
}

/// Supplier of raw quote text
///
/// Implementations (adapters) live in the infrastructure layer: a local
/// file, an HTTP resource, or text embedded in the binary all qualify.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Human-readable location of the source, used in messages and logs
    fn describe(&self) -> String;

    /// Fetch the whole text blob
    async fn fetch_text(&self) -> Result<String, SourceError>;
}
