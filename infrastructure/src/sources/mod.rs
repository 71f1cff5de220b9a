//! Quote source adapters
//!
//! Implementations of the [`QuoteSource`](quotebox_application::QuoteSource)
//! port. The HTTP source is behind the `http-source` feature.

mod file;
#[cfg(feature = "http-source")]
mod http;
mod static_text;

pub use file::FileQuoteSource;
#[cfg(feature = "http-source")]
pub use http::HttpQuoteSource;
pub use static_text::StaticQuoteSource;

/// Upper bound on the size of a quote source (5 MB)
pub const MAX_SOURCE_SIZE: u64 = 5 * 1024 * 1024;
