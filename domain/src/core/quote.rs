//! Quote value object

use serde::{Deserialize, Serialize};

/// One line of source text, shown as an opaque display string (Value Object)
///
/// A quote is always trimmed and never empty. It has no identity beyond its
/// content; two equal quotes loaded from different lines are still distinct
/// entries of a [`QuoteStore`](crate::QuoteStore) by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Quote {
    content: String,
}

impl Quote {
    /// Create a quote from a raw line, returning None if it is blank
    ///
    /// Surrounding whitespace and byte order marks are trimmed before the check.
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content
            .as_ref()
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the quote text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }

    /// Number of characters (not bytes) in the quote
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// A short form for log lines, cut after `max_chars` characters
    pub fn preview(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &self.content[..end]),
            None => self.content.clone(),
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

impl TryFrom<String> for Quote {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Quote::try_new(&value).ok_or_else(|| "quote must not be blank".to_string())
    }
}

impl From<Quote> for String {
    fn from(quote: Quote) -> Self {
        quote.content
    }
}

impl AsRef<str> for Quote {
    fn as_ref(&self) -> &str {
        &self.content
    }
}
