//! Quote source backed by text held in memory

use async_trait::async_trait;
use quotebox_application::{QuoteSource, SourceError};
use std::borrow::Cow;

/// Serves a fixed text blob, e.g. one embedded with `include_str!`
#[derive(Debug, Clone)]
pub struct StaticQuoteSource {
    name: String,
    text: Cow<'static, str>,
}

impl StaticQuoteSource {
    pub fn new(name: impl Into<String>, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        Ok(self.text.to_string())
    }
}
