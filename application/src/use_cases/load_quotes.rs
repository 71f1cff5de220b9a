//! Load Quotes use case.
//!
//! Reads text from a [`QuoteSource`] and replaces the contents of a
//! [`QuoteStore`]. The store is only touched once text has been obtained,
//! so a failed load leaves the previous quotes in place.

use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::quote_source::{QuoteSource, SourceError};
use quotebox_domain::QuoteStore;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading quotes.
///
/// An empty source is not an error; see [`LoadQuotesOutput::is_empty`].
#[derive(Error, Debug)]
pub enum LoadQuotesError {
    #[error("Failed to load quotes from {source_name}: {cause}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        cause: SourceError,
    },
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadQuotesOutput {
    /// Where the text came from.
    pub source: String,
    /// Number of quotes now in the store.
    pub count: usize,
}

impl LoadQuotesOutput {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Use case for (re)loading the quote store from a source.
#[derive(Clone)]
pub struct LoadQuotesUseCase {
    source: Arc<dyn QuoteSource>,
}

impl LoadQuotesUseCase {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Description of the configured source.
    pub fn source_name(&self) -> String {
        self.source.describe()
    }

    /// Load without progress reporting.
    pub async fn execute(&self, store: &mut QuoteStore) -> Result<LoadQuotesOutput, LoadQuotesError> {
        self.execute_with_progress(store, &NoProgress).await
    }

    /// Load, reporting start, completion or failure to `progress`.
    pub async fn execute_with_progress(
        &self,
        store: &mut QuoteStore,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<LoadQuotesOutput, LoadQuotesError> {
        let source_name = self.source.describe();
        progress.on_load_start(&source_name);

        let text = match self.source.fetch_text().await {
            Ok(text) => text,
            Err(cause) => {
                warn!("Failed to load quotes from {}: {}", source_name, cause);
                progress.on_load_failed(&source_name, &cause);
                return Err(LoadQuotesError::SourceUnavailable { source_name, cause });
            }
        };

        let count = store.load(&text);
        if count == 0 {
            warn!("No quotes found in {}", source_name);
        } else {
            info!("Loaded {} quotes from {}", count, source_name);
        }
        progress.on_load_complete(&source_name, count);

        Ok(LoadQuotesOutput {
            source: source_name,
            count,
        })
    }
}
