//! Progress reporting while quotes load and reveal

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quotebox_application::{LoadProgressNotifier, SourceError};
use std::sync::Mutex;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Reports load progress with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_load_start(&self, source: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(spinner_style());
        pb.set_message(format!("Loading quotes from {}...", source));
        pb.enable_steady_tick(TICK);

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_load_complete(&self, _source: &str, count: usize) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        if count == 0 {
            eprintln!("{} no quotes found", "!".yellow());
        }
    }

    fn on_load_failed(&self, source: &str, error: &SourceError) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
        eprintln!("{} could not load {}: {}", "x".red(), source, error);
    }
}

/// Shows a spinner for `delay` before a quote is revealed
///
/// A zero delay returns immediately without drawing anything.
pub async fn reveal_pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message("Fetching a quote...");
    pb.enable_steady_tick(TICK);

    tokio::time::sleep(delay).await;

    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_handles_complete_without_start() {
        let reporter = ProgressReporter::new();
        reporter.on_load_complete("x", 2);
        assert!(reporter.take_spinner().is_none());
    }

    #[test]
    fn test_reporter_clears_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_load_start("quotes.txt");
        reporter.on_load_failed("quotes.txt", &SourceError::NotFound("quotes.txt".into()));
        assert!(reporter.take_spinner().is_none());
    }

    #[tokio::test]
    async fn test_zero_reveal_pause_returns() {
        reveal_pause(Duration::ZERO).await;
    }
}
