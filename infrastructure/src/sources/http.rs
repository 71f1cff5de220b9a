//! HTTP quote source

use super::MAX_SOURCE_SIZE;
use async_trait::async_trait;
use quotebox_application::{QuoteSource, SourceError};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("quotebox/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches quotes from a URL serving plain text
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        if let Some(length) = response.content_length()
            && length > MAX_SOURCE_SIZE
        {
            return Err(SourceError::TooLarge {
                size: length,
                max: MAX_SOURCE_SIZE,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::RequestFailed(format!("Failed to read response body: {}", e)))?;
        if body.len() as u64 > MAX_SOURCE_SIZE {
            return Err(SourceError::TooLarge {
                size: body.len() as u64,
                max: MAX_SOURCE_SIZE,
            });
        }
        debug!("Fetched {} bytes from {}", body.len(), self.url);

        String::from_utf8(body.to_vec()).map_err(|e| SourceError::InvalidEncoding(e.to_string()))
    }
}
