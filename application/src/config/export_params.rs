//! Export parameters.

use serde::{Deserialize, Serialize};

/// Title used when none is configured
pub const DEFAULT_EXPORT_TITLE: &str = "Quotebox Collection";

/// Controls how [`ExportQuotesUseCase`](crate::use_cases::export_quotes::ExportQuotesUseCase)
/// titles and names the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParams {
    /// First line of the document and prefix of the file name.
    pub title: String,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            title: DEFAULT_EXPORT_TITLE.to_string(),
        }
    }
}

impl ExportParams {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ExportParams::default().title, "Quotebox Collection");
    }

    #[test]
    fn test_builder() {
        let params = ExportParams::default().with_title("Edicts");
        assert_eq!(params.title, "Edicts");
    }
}
