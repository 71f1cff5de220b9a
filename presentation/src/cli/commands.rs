//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use quotebox_domain::{OutputFormat, Theme};
use std::path::PathBuf;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Theme flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    /// Terminal default colours
    Plain,
    /// Green phosphor CRT look
    Crt,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Plain => Theme::Plain,
            ThemeArg::Crt => Theme::Crt,
        }
    }
}

/// Subcommands; `interactive` is the default
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print random quotes
    Pick {
        /// How many quotes to draw
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Print every quote with its number
    List,

    /// Write all quotes to a text file
    Export {
        /// Output file (default: <title>_<date>.txt in the export directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Copy quotes to the system clipboard (a random one by default)
    Copy {
        /// Copy the quote with this number
        #[arg(short, long, value_name = "N", conflicts_with = "all")]
        number: Option<usize>,

        /// Copy the whole numbered list
        #[arg(short, long)]
        all: bool,
    },

    /// Interactive mode: press enter for a random quote
    Interactive,
}

/// CLI arguments for quotebox
#[derive(Parser, Debug)]
#[command(name = "quotebox")]
#[command(author, version, about = "Random quote box - one line at a time")]
#[command(long_about = r#"
Quotebox loads a plain-text file with one quote per line and shows one at
random whenever you ask. Blank lines are ignored.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./quotebox.toml       Project-level config
3. ~/.config/quotebox/config.toml   Global config

Example:
  quotebox --source tang.txt
  quotebox --source tang.txt pick -n 3
  quotebox --url https://example.com/quotes.txt list
  quotebox export -o all-quotes.txt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quote file, one quote per line (default: ./quotes.txt)
    #[arg(short, long, value_name = "PATH", global = true, conflicts_with = "url")]
    pub source: Option<PathBuf>,

    /// Fetch quotes over HTTP instead of reading a file
    #[arg(long, value_name = "URL", global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    pub output_format: Option<FormatArg>,

    /// Display theme
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeArg>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run, defaulting to interactive mode
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
