//! Presentation layer for quotebox
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quote prompt.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg, ThemeArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, reveal_pause};
pub use repl::{ExportFactory, Flow, QuoteRepl, ReplCommand};
