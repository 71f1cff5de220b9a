use super::ENTRY_SEPARATOR;
use crate::core::error::DomainError;
use crate::core::quote::Quote;
use chrono::NaiveDateTime;

const RULE_WIDTH: usize = 50;

/// A plain-text dump of every quote with a short header
#[derive(Debug, Clone)]
pub struct ExportDocument<'a> {
    title: &'a str,
    generated_at: NaiveDateTime,
    quotes: &'a [Quote],
}

impl<'a> ExportDocument<'a> {
    /// Build a document; an empty quote list has nothing to export
    pub fn new(
        title: &'a str,
        generated_at: NaiveDateTime,
        quotes: &'a [Quote],
    ) -> Result<Self, DomainError> {
        if quotes.is_empty() {
            return Err(DomainError::EmptyStore);
        }
        Ok(Self {
            title,
            generated_at,
            quotes,
        })
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// Suggested file name for this document
    pub fn file_name(&self) -> String {
        export_file_name(self.title, self.generated_at)
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(self.title);
        output.push('\n');
        output.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        output.push_str(&format!("Total: {} quotes\n", self.quotes.len()));
        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push_str("\n\n");

        let body = self
            .quotes
            .iter()
            .enumerate()
            .map(|(i, quote)| format!("{:03}. {}", i + 1, quote))
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR);
        output.push_str(&body);

        output
    }
}

/// `{title}_{YYYY-MM-DD}.txt`
///
/// Path separators and control characters in the title become `_`, so the
/// result is always a single path component.
pub fn export_file_name(title: &str, date: NaiveDateTime) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}.txt", stem, date.format("%Y-%m-%d"))
}
