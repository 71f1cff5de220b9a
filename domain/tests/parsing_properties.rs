//! Property tests for quote parsing and store loading

use proptest::prelude::*;
use quotebox_domain::{QuoteStore, parse_quotes};

/// Lines mixing blanks, padding and ordinary text
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[ \t]{0,3}[a-zA-Z0-9,.!? ]{1,30}[ \t]{0,3}",
        "[\u{4e00}-\u{4e20}]{1,12}",
    ]
}

fn text_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec(line_strategy(), 0..30).prop_map(|lines| {
        let text = lines.join("\n");
        (lines, text)
    })
}

proptest! {
    /// Loading keeps exactly the non-blank trimmed lines, in order
    #[test]
    fn load_keeps_trimmed_non_blank_lines((lines, text) in text_strategy()) {
        let expected: Vec<String> = lines
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        let mut store = QuoteStore::new();
        let count = store.load(&text);

        let loaded: Vec<String> = store
            .get_all()
            .iter()
            .map(|q| q.content().to_string())
            .collect();
        prop_assert_eq!(count, expected.len());
        prop_assert_eq!(loaded, expected);
    }

    /// No loaded quote is blank or carries surrounding whitespace
    #[test]
    fn parsed_quotes_are_trimmed((_, text) in text_strategy()) {
        for quote in parse_quotes(&text) {
            prop_assert!(!quote.content().is_empty());
            prop_assert_eq!(quote.content(), quote.content().trim());
        }
    }

    /// CRLF line endings parse the same as LF
    #[test]
    fn crlf_matches_lf((lines, text) in text_strategy()) {
        let crlf = lines.join("\r\n");
        prop_assert_eq!(parse_quotes(&crlf), parse_quotes(&text));
    }

    /// A pick from a loaded store always returns a member and records it
    #[test]
    fn pick_returns_member((_, text) in text_strategy()) {
        let mut store = QuoteStore::new();
        let count = store.load(&text);

        match store.pick_random() {
            Ok(quote) => {
                prop_assert!(count > 0);
                prop_assert!(store.get_all().contains(&quote));
                prop_assert_eq!(store.current_selection(), Some(&quote));
            }
            Err(e) => {
                prop_assert_eq!(count, 0);
                prop_assert!(e.is_empty_store());
            }
        }
    }
}
