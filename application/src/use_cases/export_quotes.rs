//! Export Quotes use case.
//!
//! Renders every loaded quote into an [`ExportDocument`] and hands it to an
//! [`ExportSink`].

use crate::config::ExportParams;
use crate::ports::export_sink::{ExportSink, ExportSinkError};
use chrono::NaiveDateTime;
use quotebox_domain::{ExportDocument, QuoteStore};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No quotes available to export")]
    EmptyStore,

    #[error(transparent)]
    Sink(#[from] ExportSinkError),
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutput {
    pub path: PathBuf,
    pub count: usize,
}

/// Use case for exporting the store to a text document.
#[derive(Clone)]
pub struct ExportQuotesUseCase {
    sink: Arc<dyn ExportSink>,
    params: ExportParams,
}

impl ExportQuotesUseCase {
    pub fn new(sink: Arc<dyn ExportSink>, params: ExportParams) -> Self {
        Self { sink, params }
    }

    /// Export stamped with the current local time.
    pub async fn execute(&self, store: &QuoteStore) -> Result<ExportOutput, ExportError> {
        self.execute_at(store, chrono::Local::now().naive_local())
            .await
    }

    /// Export stamped with the given time.
    pub async fn execute_at(
        &self,
        store: &QuoteStore,
        generated_at: NaiveDateTime,
    ) -> Result<ExportOutput, ExportError> {
        let document = ExportDocument::new(&self.params.title, generated_at, store.get_all())
            .map_err(|_| ExportError::EmptyStore)?;

        let path = self
            .sink
            .write(&document.file_name(), &document.render())
            .await?;

        info!(
            "Exported {} quotes to {}",
            document.quote_count(),
            path.display()
        );

        Ok(ExportOutput {
            path,
            count: document.quote_count(),
        })
    }
}
