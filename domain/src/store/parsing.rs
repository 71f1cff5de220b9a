//! Line parsing for quote source text.
//!
//! The source format is one quote per line: blank lines are ignored and
//! there is no escaping or structured syntax.

use crate::core::quote::Quote;

/// Parse raw source text into quotes, preserving line order.
///
/// Accepts both `\n` and `\r\n` line endings and ignores a leading UTF-8
/// byte order mark. Each line is trimmed and lines that are empty after
/// trimming are dropped.
pub fn parse_quotes(text: &str) -> Vec<Quote> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    text.lines().filter_map(Quote::try_new).collect()
}
