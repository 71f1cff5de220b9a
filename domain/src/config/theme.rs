//! Display theme value object

use serde::{Deserialize, Serialize};

/// Cosmetic styling of displayed quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Terminal default colours
    #[default]
    Plain,
    /// Green phosphor with scan-line rules, after an old CRT monitor
    Crt,
}

impl Theme {
    /// The other theme; used by the interactive `/crt` switch
    pub fn toggled(self) -> Self {
        match self {
            Theme::Plain => Theme::Crt,
            Theme::Crt => Theme::Plain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Plain => "plain",
            Theme::Crt => "crt",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Plain.toggled(), Theme::Crt);
        assert_eq!(Theme::Crt.toggled(), Theme::Plain);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let theme: Theme = serde_json::from_str("\"crt\"").unwrap();
        assert_eq!(theme, Theme::Crt);
    }
}
