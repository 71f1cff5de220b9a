//! Quote source configuration from TOML (`[source]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw source configuration from TOML
///
/// At most one of `path` and `url` may be set. With neither, the CLI falls
/// back to `./quotes.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Local text file, one quote per line
    pub path: Option<PathBuf>,
    /// HTTP(S) resource serving the same format
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_source_url_deserialize() {
        let toml_str = r#"
[source]
url = "https://example.com/quotes.txt"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.source.url.as_deref(),
            Some("https://example.com/quotes.txt")
        );
        assert!(config.source.path.is_none());
    }
}
