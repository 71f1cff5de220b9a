//! In-memory quote store

use super::parsing::parse_quotes;
use super::selection::Selection;
use crate::core::error::DomainError;
use crate::core::quote::Quote;
use rand::Rng;

/// Holds the loaded quote sequence and the most recent pick
///
/// The store has two observable states: empty and loaded. [`load`](Self::load)
/// moves between them in either direction and only
/// [`pick_random`](Self::pick_random) requires the loaded state.
///
/// The store is not synchronized. Hosts sharing it across threads must wrap
/// it themselves.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    current: Option<Quote>,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored sequence with the quotes parsed from `source_text`
    ///
    /// Returns the number of quotes loaded. Zero is a valid result, not an
    /// error. The current selection is left as it was.
    pub fn load(&mut self, source_text: &str) -> usize {
        self.quotes = parse_quotes(source_text);
        self.quotes.len()
    }

    /// Pick a quote uniformly at random using the thread-local generator
    pub fn pick_random(&mut self) -> Result<Quote, DomainError> {
        self.pick_random_with(&mut rand::rng())
            .map(|selection| selection.quote)
    }

    /// Pick a quote uniformly at random using the given generator
    ///
    /// Updates the current selection on success.
    pub fn pick_random_with<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Selection, DomainError> {
        if self.quotes.is_empty() {
            return Err(DomainError::EmptyStore);
        }

        let index = rng.random_range(0..self.quotes.len());
        let quote = self.quotes[index].clone();
        self.current = Some(quote.clone());

        Ok(Selection::new(index, quote))
    }

    /// All quotes in source order
    pub fn get_all(&self) -> &[Quote] {
        &self.quotes
    }

    /// The most recent pick, if any
    pub fn current_selection(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    /// Look up a quote by its one-based display number
    pub fn get_by_number(&self, number: usize) -> Result<&Quote, DomainError> {
        number
            .checked_sub(1)
            .and_then(|index| self.quotes.get(index))
            .ok_or(DomainError::NoSuchQuote {
                number,
                len: self.quotes.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
