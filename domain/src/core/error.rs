//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No quotes available, load data first")]
    EmptyStore,

    #[error("No quote numbered {number} (store holds {len})")]
    NoSuchQuote { number: usize, len: usize },
}

impl DomainError {
    /// Check if this error means the store has nothing to offer
    pub fn is_empty_store(&self) -> bool {
        matches!(self, DomainError::EmptyStore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_display() {
        assert_eq!(
            DomainError::EmptyStore.to_string(),
            "No quotes available, load data first"
        );
    }

    #[test]
    fn test_is_empty_store_check() {
        assert!(DomainError::EmptyStore.is_empty_store());
        assert!(!DomainError::NoSuchQuote { number: 4, len: 3 }.is_empty_store());
    }
}
