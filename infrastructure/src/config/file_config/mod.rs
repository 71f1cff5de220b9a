//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod export;
mod output;
mod repl;
mod source;

pub use export::FileExportConfig;
pub use output::FileOutputConfig;
pub use repl::{DEFAULT_REVEAL_DELAY_MS, FileReplConfig};
pub use source::FileSourceConfig;

use quotebox_application::ExportParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("[source] sets both path and url; choose one")]
    AmbiguousSource,

    #[error("[source] url cannot be empty")]
    EmptySourceUrl,

    #[error("[export] title cannot be empty")]
    EmptyExportTitle,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where quotes are read from
    pub source: FileSourceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Export settings
    pub export: FileExportConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.source.path.is_some() && self.source.url.is_some() {
            return Err(ConfigValidationError::AmbiguousSource);
        }

        if let Some(url) = &self.source.url
            && url.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptySourceUrl);
        }

        if self.export.title.trim().is_empty() {
            return Err(ConfigValidationError::EmptyExportTitle);
        }

        Ok(())
    }

    /// Export parameters for the application layer
    pub fn export_params(&self) -> ExportParams {
        ExportParams::default().with_title(self.export.title.trim())
    }
}
