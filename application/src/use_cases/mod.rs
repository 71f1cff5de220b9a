//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod copy_quote;
pub mod export_quotes;
pub mod load_quotes;
pub mod pick_quote;
