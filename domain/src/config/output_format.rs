//! Output format value object

use serde::{Deserialize, Serialize};

/// How picked quotes and listings are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally coloured text (default)
    #[default]
    Text,
    /// One JSON document per command
    Json,
}
