//! Configuration file loading for quotebox
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./quotebox.toml` or `./.quotebox.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quotebox/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_REVEAL_DELAY_MS, FileConfig, FileExportConfig,
    FileOutputConfig, FileReplConfig, FileSourceConfig,
};
pub use loader::ConfigLoader;
