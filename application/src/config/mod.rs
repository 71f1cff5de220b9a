//! Application-level configuration.
//!
//! - [`ExportParams`] — title of exported documents

pub mod export_params;

pub use export_params::{DEFAULT_EXPORT_TITLE, ExportParams};
