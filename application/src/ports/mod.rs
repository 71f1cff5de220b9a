//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clipboard;
pub mod export_sink;
pub mod progress;
pub mod quote_source;
