//! Pick Quote use case.

use quotebox_domain::{QuoteStore, Selection};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PickQuoteError {
    #[error("No quotes available, load data first")]
    EmptyStore,
}

/// Use case for drawing a random quote from the store.
#[derive(Debug, Clone, Default)]
pub struct PickQuoteUseCase;

impl PickQuoteUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Pick one quote with the thread-local generator.
    pub fn execute(&self, store: &mut QuoteStore) -> Result<Selection, PickQuoteError> {
        self.execute_with(store, &mut rand::rng())
    }

    /// Pick one quote with the given generator.
    pub fn execute_with<R: rand::Rng>(
        &self,
        store: &mut QuoteStore,
        rng: &mut R,
    ) -> Result<Selection, PickQuoteError> {
        let selection = store
            .pick_random_with(rng)
            .map_err(|_| PickQuoteError::EmptyStore)?;
        debug!(
            "Showing quote #{} of {}: {}",
            selection.number(),
            store.len(),
            selection.quote.preview(60)
        );
        Ok(selection)
    }

    /// Pick `count` quotes in a row; the last one becomes the current selection.
    pub fn execute_many(
        &self,
        store: &mut QuoteStore,
        count: usize,
    ) -> Result<Vec<Selection>, PickQuoteError> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| self.execute_with(store, &mut rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_from_empty_store() {
        let mut store = QuoteStore::new();
        assert_eq!(
            PickQuoteUseCase::new().execute(&mut store),
            Err(PickQuoteError::EmptyStore)
        );
    }

    #[test]
    fn test_pick_updates_selection() {
        let mut store = QuoteStore::new();
        store.load("a\nb");

        let selection = PickQuoteUseCase::new().execute(&mut store).unwrap();

        assert_eq!(store.current_selection(), Some(&selection.quote));
    }

    #[test]
    fn test_execute_many() {
        let mut store = QuoteStore::new();
        store.load("a\nb\nc");

        let picks = PickQuoteUseCase::new().execute_many(&mut store, 4).unwrap();

        assert_eq!(picks.len(), 4);
        assert_eq!(store.current_selection(), Some(&picks[3].quote));
    }

    #[test]
    fn test_execute_many_zero() {
        let mut store = QuoteStore::new();
        assert!(PickQuoteUseCase::new()
            .execute_many(&mut store, 0)
            .unwrap()
            .is_empty());
    }
}
