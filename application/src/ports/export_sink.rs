//! Export sink port
//!
//! Defines where rendered export documents are written.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportSinkError {
    #[error("Failed to create {path}: {message}")]
    CreateFailed { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Write `contents` under the suggested file name and return the final
    /// location
    async fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ExportSinkError>;
}
