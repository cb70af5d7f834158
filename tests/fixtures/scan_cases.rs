use crate::harness::{load_suite, scanner_with_open_tags, tag_names, token_kind};
use svelte_scanner::StrLexer;

#[test]
fn scan_suite() {
    let mut failures = Vec::new();

    for case in load_suite().scans {
        let open_tags: Vec<&str> = case.open_tags.iter().map(String::as_str).collect();
        let mut scanner = scanner_with_open_tags(&open_tags);
        let mut lexer = StrLexer::new(&case.input);

        let actual = scanner
            .scan(&mut lexer, case.valid_symbols())
            .map(|kind| (kind, lexer.token_text().to_string()));

        let expected = case
            .token
            .as_ref()
            .map(|(kind, text)| (token_kind(kind), text.clone()));

        if actual != expected {
            failures.push(format!(
                "{}\n  expected token: {:?}\n  actual token:   {:?}",
                case.description, expected, actual
            ));
        }

        let open_tags_after = tag_names(&scanner);

        if open_tags_after != case.open_tags_after {
            failures.push(format!(
                "{}\n  expected open tags: {:?}\n  actual open tags:   {:?}",
                case.description, case.open_tags_after, open_tags_after
            ));
        }
    }

    assert!(failures.is_empty(), "\n{}", failures.join("\n\n"));
}
