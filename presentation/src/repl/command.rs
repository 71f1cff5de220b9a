//! REPL input parsing

use std::path::PathBuf;

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Draw a random quote (empty line or `g`)
    Generate,
    /// Copy the last quote shown
    CopyCurrent,
    /// Copy the quote with this number
    CopyNumber(usize),
    /// Copy the numbered list
    CopyAll,
    /// Show every quote
    List,
    /// Export to the default location or the given path
    Export(Option<PathBuf>),
    /// Re-read the source
    Reload,
    /// Switch between plain and CRT themes
    ToggleTheme,
    Help,
    Quit,
    /// Anything else; carries the input for the error message
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match (head, rest) {
            ("" | "g" | "generate", "") => ReplCommand::Generate,
            ("/copy" | "/c", "") => ReplCommand::CopyCurrent,
            ("/copy" | "/c", n) => match n.parse() {
                Ok(number) => ReplCommand::CopyNumber(number),
                Err(_) => ReplCommand::Unknown(line.to_string()),
            },
            ("/copy-all", "") => ReplCommand::CopyAll,
            ("/list" | "/l" | "v", "") => ReplCommand::List,
            ("/export", "") => ReplCommand::Export(None),
            ("/export", path) => ReplCommand::Export(Some(PathBuf::from(path))),
            ("/reload", "") => ReplCommand::Reload,
            ("/crt", "") => ReplCommand::ToggleTheme,
            ("/help" | "/h" | "/?", "") => ReplCommand::Help,
            ("/quit" | "/exit" | "/q", "") => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_inputs() {
        assert_eq!(ReplCommand::parse(""), ReplCommand::Generate);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Generate);
        assert_eq!(ReplCommand::parse("g"), ReplCommand::Generate);
    }

    #[test]
    fn test_copy_variants() {
        assert_eq!(ReplCommand::parse("/copy"), ReplCommand::CopyCurrent);
        assert_eq!(ReplCommand::parse("/copy 12"), ReplCommand::CopyNumber(12));
        assert_eq!(ReplCommand::parse("/copy-all"), ReplCommand::CopyAll);
        assert_eq!(
            ReplCommand::parse("/copy twelve"),
            ReplCommand::Unknown("/copy twelve".to_string())
        );
    }

    #[test]
    fn test_export_with_path() {
        assert_eq!(ReplCommand::parse("/export"), ReplCommand::Export(None));
        assert_eq!(
            ReplCommand::parse("/export  out/all quotes.txt "),
            ReplCommand::Export(Some(PathBuf::from("out/all quotes.txt")))
        );
    }

    #[test]
    fn test_misc_commands() {
        assert_eq!(ReplCommand::parse("/list"), ReplCommand::List);
        assert_eq!(ReplCommand::parse("/reload"), ReplCommand::Reload);
        assert_eq!(ReplCommand::parse("/crt"), ReplCommand::ToggleTheme);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            ReplCommand::parse("/dance"),
            ReplCommand::Unknown("/dance".to_string())
        );
        assert_eq!(
            ReplCommand::parse("hello there"),
            ReplCommand::Unknown("hello there".to_string())
        );
    }
}
