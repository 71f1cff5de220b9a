//! Selection value object

use crate::core::quote::Quote;
use serde::{Deserialize, Serialize};

/// The outcome of a random pick: the quote and where it sits in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Zero-based position in the store at the time of the pick
    pub index: usize,
    pub quote: Quote,
}

impl Selection {
    pub fn new(index: usize, quote: Quote) -> Self {
        Self { index, quote }
    }

    /// One-based number, as shown to users
    pub fn number(&self) -> usize {
        self.index + 1
    }
}
