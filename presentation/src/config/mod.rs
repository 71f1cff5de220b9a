//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use quotebox_domain::{OutputFormat, Theme};
use std::path::PathBuf;
use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub theme: Theme,
    /// Enable colored terminal output
    pub color: bool,
    /// Hide status lines and spinners
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            theme: Theme::default(),
            color: true,
            quiet: false,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Spinner time before each quote is revealed
    pub reveal_delay: Duration,
    /// Path to history file (default: data dir)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(300),
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// History file location, falling back to `<data dir>/quotebox/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("quotebox").join("history.txt")))
    }
}
