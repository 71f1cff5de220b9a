//! Interactive mode
//!
//! A reedline-based prompt where each empty line draws a new quote.

mod command;
mod session;

pub use command::ReplCommand;
pub use session::{ExportFactory, Flow, QuoteRepl};
