//! Domain layer for quotebox
//!
//! This crate contains the quote value object, the in-memory quote store
//! and the pure renderings of a quote list. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Quote**: one non-empty, trimmed line of source text
//! - **QuoteStore**: the loaded sequence plus the most recent random pick
//! - **Selection**: a picked quote together with its position

pub mod config;
pub mod core;
pub mod listing;
pub mod store;

// Re-export commonly used types
pub use config::{OutputFormat, Theme};
pub use core::{error::DomainError, quote::Quote};
pub use listing::{
    ExportDocument, display_number, export_file_name, render_numbered_list,
};
pub use store::{parsing::parse_quotes, quote_store::QuoteStore, selection::Selection};
