//! Local file quote source

use super::MAX_SOURCE_SIZE;
use async_trait::async_trait;
use quotebox_application::{QuoteSource, SourceError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads quotes from a text file on disk
#[derive(Debug, Clone)]
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> SourceError {
        if e.kind() == ErrorKind::NotFound {
            SourceError::NotFound(self.path.display().to_string())
        } else {
            SourceError::Io {
                location: self.path.display().to_string(),
                message: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl QuoteSource for FileQuoteSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        if metadata.len() > MAX_SOURCE_SIZE {
            return Err(SourceError::TooLarge {
                size: metadata.len(),
                max: MAX_SOURCE_SIZE,
            });
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!("Read {} bytes from {}", bytes.len(), self.path.display());

        String::from_utf8(bytes).map_err(|e| SourceError::InvalidEncoding(e.to_string()))
    }
}
