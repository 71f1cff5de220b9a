//! Progress notification port
//!
//! Defines the interface for reporting progress while quotes are loaded.

use super::quote_source::SourceError;

/// Callback for load progress
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing at all).
pub trait LoadProgressNotifier: Send + Sync {
    /// Called before the source is read
    fn on_load_start(&self, source: &str);

    /// Called after the store has been replaced
    fn on_load_complete(&self, source: &str, count: usize);

    /// Called when the source could not supply text
    fn on_load_failed(&self, source: &str, error: &SourceError);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_load_start(&self, _source: &str) {}
    fn on_load_complete(&self, _source: &str, _count: usize) {}
    fn on_load_failed(&self, _source: &str, _error: &SourceError) {}
}
