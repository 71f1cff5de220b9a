//! Console output formatter for quotes and listings

use colored::Colorize;
use quotebox_application::{ExportOutput, LoadQuotesOutput};
use quotebox_domain::{Quote, Selection, Theme, display_number};
use serde_json::json;

const CRT_RULE_MAX: usize = 60;

/// Formats quotes, listings and status lines for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    theme: Theme,
}

impl ConsoleFormatter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// A single quote in display brackets
    pub fn format_quote(&self, quote: &Quote) -> String {
        let framed = format!("『 {} 』", quote);
        match self.theme {
            Theme::Plain => framed.bold().to_string(),
            Theme::Crt => {
                let rule = Self::scan_line(quote.char_len() + 4);
                format!(
                    "{}\n{}\n{}",
                    rule,
                    framed.bright_green().bold(),
                    rule
                )
            }
        }
    }

    /// A picked quote followed by its position in the store
    pub fn format_selection(&self, selection: &Selection, total: usize) -> String {
        let position = format!("{} / {}", display_number(selection.number()), total);
        format!(
            "{}\n{}",
            self.format_quote(&selection.quote),
            position.dimmed()
        )
    }

    /// Every quote with its `#NNN` label
    pub fn format_listing(&self, quotes: &[Quote]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("All quotes ({})", quotes.len())));
        output.push('\n');

        for (i, quote) in quotes.iter().enumerate() {
            let label = display_number(i + 1);
            let label = match self.theme {
                Theme::Plain => label.cyan().to_string(),
                Theme::Crt => label.green().to_string(),
            };
            output.push_str(&format!("{}  {}\n", label, quote));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Status line in the `>>> message <<<` prompt style
    pub fn format_status(&self, message: &str) -> String {
        let line = format!(">>> {} <<<", message);
        match self.theme {
            Theme::Plain => line.yellow().to_string(),
            Theme::Crt => line.green().to_string(),
        }
    }

    /// Error line
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", "x".red().bold(), message)
    }

    /// Success line
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", "v".green().bold(), message)
    }

    /// Status text after a load
    pub fn load_message(output: &LoadQuotesOutput) -> String {
        if output.is_empty() {
            format!("No quotes found in {}", output.source)
        } else {
            format!(
                "{} quotes loaded, press enter for a random quote",
                output.count
            )
        }
    }

    /// Status text after an export
    pub fn export_message(output: &ExportOutput) -> String {
        format!(
            "Exported {} quotes to {}",
            output.count,
            output.path.display()
        )
    }

    /// Picked quotes as a JSON array
    pub fn format_selections_json(selections: &[Selection]) -> String {
        let items: Vec<_> = selections
            .iter()
            .map(|s| json!({ "number": s.number(), "quote": s.quote }))
            .collect();
        serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Full listing as JSON
    pub fn format_listing_json(source: &str, quotes: &[Quote]) -> String {
        let value = json!({
            "source": source,
            "total": quotes.len(),
            "quotes": quotes,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Export result as JSON
    pub fn format_export_json(output: &ExportOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    fn scan_line(width: usize) -> String {
        "─".repeat(width.min(CRT_RULE_MAX)).green().dimmed().to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        "=".repeat(50).cyan().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebox_domain::parse_quotes;
    use std::path::PathBuf;

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new(Theme::Plain)
    }

    #[test]
    fn test_format_quote_plain() {
        let quote = Quote::try_new("hello").unwrap();
        assert_eq!(plain().format_quote(&quote), "『 hello 』");
    }

    #[test]
    fn test_format_quote_crt_has_rules() {
        colored::control::set_override(false);
        let quote = Quote::try_new("hi").unwrap();
        let out = ConsoleFormatter::new(Theme::Crt).format_quote(&quote);
        assert_eq!(out, "──────\n『 hi 』\n──────");
    }

    #[test]
    fn test_format_selection_shows_position() {
        let selection = Selection::new(4, Quote::try_new("five").unwrap());
        let out = plain().format_selection(&selection, 12);
        assert!(out.ends_with("#005 / 12"));
    }

    #[test]
    fn test_format_listing() {
        let quotes = parse_quotes("a\nb");
        let out = plain().format_listing(&quotes);
        assert!(out.contains("All quotes (2)"));
        assert!(out.contains("#001  a\n#002  b\n"));
    }

    #[test]
    fn test_format_status() {
        assert_eq!(plain().format_status("loading"), ">>> loading <<<");
    }

    #[test]
    fn test_load_message() {
        let loaded = LoadQuotesOutput {
            source: "q.txt".to_string(),
            count: 3,
        };
        assert_eq!(
            ConsoleFormatter::load_message(&loaded),
            "3 quotes loaded, press enter for a random quote"
        );

        let empty = LoadQuotesOutput {
            source: "q.txt".to_string(),
            count: 0,
        };
        assert_eq!(ConsoleFormatter::load_message(&empty), "No quotes found in q.txt");
    }

    #[test]
    fn test_selections_json() {
        let selection = Selection::new(0, Quote::try_new("x").unwrap());
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_selections_json(&[selection])).unwrap();
        assert_eq!(value[0]["number"], 1);
        assert_eq!(value[0]["quote"], "x");
    }

    #[test]
    fn test_listing_json() {
        let quotes = parse_quotes("a\nb\nc");
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_listing_json("src", &quotes)).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["quotes"][2], "c");
    }

    #[test]
    fn test_export_json() {
        let output = ExportOutput {
            path: PathBuf::from("out.txt"),
            count: 2,
        };
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_export_json(&output)).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["path"], "out.txt");
    }
}
