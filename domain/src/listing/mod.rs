//! Text renderings of a quote list: the copy-all listing, display
//! numbers, and the export document.

mod export;

pub use export::{ExportDocument, export_file_name};

use crate::core::error::DomainError;
use crate::core::quote::Quote;

/// Separator placed between entries of a rendered list
pub const ENTRY_SEPARATOR: &str = "\n\n";

/// Zero-padded label used in list views, e.g. `#007`
pub fn display_number(number: usize) -> String {
    format!("#{:03}", number)
}

/// Render quotes as `1. first`, `2. second`, ... separated by blank lines
pub fn render_numbered_list(quotes: &[Quote]) -> Result<String, DomainError> {
    if quotes.is_empty() {
        return Err(DomainError::EmptyStore);
    }

    Ok(quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| format!("{}. {}", i + 1, quote))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR))
}
