//! Export configuration from TOML (`[export]` section)

use quotebox_application::DEFAULT_EXPORT_TITLE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw export configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Document title and file name prefix
    pub title: String,
    /// Directory exports are written to (default: current directory)
    pub directory: Option<PathBuf>,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPORT_TITLE.to_string(),
            directory: None,
        }
    }
}
