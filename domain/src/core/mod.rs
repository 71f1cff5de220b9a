//! Core domain concepts shared across all subdomains.
//!
//! - [`quote::Quote`] — one non-empty, trimmed line of source text
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod quote;
