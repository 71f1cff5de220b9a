//! Copy Quote use case.
//!
//! Puts the current selection, a single numbered quote, or the whole
//! numbered listing on the clipboard.

use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use quotebox_domain::{DomainError, Quote, QuoteStore, render_numbered_list};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum CopyQuoteError {
    #[error("Nothing to copy yet, pick a quote first")]
    NothingSelected,

    #[error("No quotes available to copy")]
    EmptyStore,

    #[error("No quote numbered {number} (store holds {len})")]
    NoSuchQuote { number: usize, len: usize },

    #[error(transparent)]
    ClipboardUnavailable(#[from] ClipboardError),
}

impl From<DomainError> for CopyQuoteError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyStore => CopyQuoteError::EmptyStore,
            DomainError::NoSuchQuote { number, len } => CopyQuoteError::NoSuchQuote { number, len },
        }
    }
}

/// What a copy placed on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopiedContent {
    /// A single quote
    Quote(Quote),
    /// The numbered listing of this many quotes
    All(usize),
}

/// Use case for copying quotes to the clipboard.
#[derive(Clone)]
pub struct CopyQuoteUseCase {
    clipboard: Arc<dyn ClipboardPort>,
}

impl CopyQuoteUseCase {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { clipboard }
    }

    /// Copy the most recently picked quote.
    pub fn copy_current(&self, store: &QuoteStore) -> Result<CopiedContent, CopyQuoteError> {
        let quote = store
            .current_selection()
            .ok_or(CopyQuoteError::NothingSelected)?;
        self.copy_quote(quote)
    }

    /// Copy the quote with the given one-based number.
    pub fn copy_number(
        &self,
        store: &QuoteStore,
        number: usize,
    ) -> Result<CopiedContent, CopyQuoteError> {
        if store.is_empty() {
            return Err(CopyQuoteError::EmptyStore);
        }
        let quote = store.get_by_number(number)?;
        self.copy_quote(quote)
    }

    /// Copy every quote as a numbered list.
    pub fn copy_all(&self, store: &QuoteStore) -> Result<CopiedContent, CopyQuoteError> {
        let listing = render_numbered_list(store.get_all())?;
        self.write(&listing)?;
        info!("Copied all {} quotes to clipboard", store.len());
        Ok(CopiedContent::All(store.len()))
    }

    fn copy_quote(&self, quote: &Quote) -> Result<CopiedContent, CopyQuoteError> {
        self.write(quote.content())?;
        info!("Copied quote to clipboard: {}", quote.preview(60));
        Ok(CopiedContent::Quote(quote.clone()))
    }

    fn write(&self, text: &str) -> Result<(), CopyQuoteError> {
        self.clipboard.copy_text(text).map_err(|e| {
            warn!("Clipboard copy failed: {}", e);
            CopyQuoteError::ClipboardUnavailable(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clipboard::NoClipboard;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Mutex<Option<String>>,
    }

    impl ClipboardPort for MemoryClipboard {
        fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn loaded_store() -> QuoteStore {
        let mut store = QuoteStore::new();
        store.load("first\nsecond\nthird");
        store
    }

    #[test]
    fn test_copy_current_without_selection() {
        let use_case = CopyQuoteUseCase::new(Arc::new(MemoryClipboard::default()));
        let err = use_case.copy_current(&loaded_store()).unwrap_err();
        assert!(matches!(err, CopyQuoteError::NothingSelected));
    }

    #[test]
    fn test_copy_current_after_pick() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let use_case = CopyQuoteUseCase::new(clipboard.clone());
        let mut store = loaded_store();
        let picked = store.pick_random().unwrap();

        let copied = use_case.copy_current(&store).unwrap();

        assert_eq!(copied, CopiedContent::Quote(picked.clone()));
        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some(picked.content())
        );
    }

    #[test]
    fn test_copy_number() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let use_case = CopyQuoteUseCase::new(clipboard.clone());

        use_case.copy_number(&loaded_store(), 2).unwrap();
        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("second"));

        let err = use_case.copy_number(&loaded_store(), 9).unwrap_err();
        assert!(matches!(err, CopyQuoteError::NoSuchQuote { number: 9, len: 3 }));
    }

    #[test]
    fn test_copy_all_formats_numbered_list() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let use_case = CopyQuoteUseCase::new(clipboard.clone());

        let copied = use_case.copy_all(&loaded_store()).unwrap();

        assert_eq!(copied, CopiedContent::All(3));
        assert_eq!(
            clipboard.contents.lock().unwrap().as_deref(),
            Some("1. first\n\n2. second\n\n3. third")
        );
    }

    #[test]
    fn test_copy_all_empty_store() {
        let use_case = CopyQuoteUseCase::new(Arc::new(MemoryClipboard::default()));
        let err = use_case.copy_all(&QuoteStore::new()).unwrap_err();
        assert!(matches!(err, CopyQuoteError::EmptyStore));
    }

    #[test]
    fn test_clipboard_failure_surfaces() {
        let use_case = CopyQuoteUseCase::new(Arc::new(NoClipboard));
        let err = use_case.copy_all(&loaded_store()).unwrap_err();
        assert!(matches!(err, CopyQuoteError::ClipboardUnavailable(_)));
    }
}
