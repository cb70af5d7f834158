
pub use self::driver::{tokenize, tokens, ScannedToken, TemplateDriver};
pub use self::suite::{load_suite, token_kind};

use svelte_scanner::{Scanner, StrLexer, Tag, TagKind, TokenKind, ValidSymbols};

/// Creates a scanner with the given elements open, innermost last.
pub fn scanner_with_open_tags(names: &[&str]) -> Scanner {
    let mut scanner = Scanner::new();

    for name in names {
        let mut lexer = StrLexer::new(name);

        assert_eq!(
            scanner.scan(&mut lexer, ValidSymbols::START_TAG_NAME).map(TokenKind::id),
            Some(start_tag_token_kind(name).id()),
            "Opening `{name}`"
        );
    }

    scanner
}

fn start_tag_token_kind(name: &str) -> TokenKind {
    match Tag::for_name(name).kind() {
        TagKind::Script => TokenKind::ScriptStartTagName,
        TagKind::Style => TokenKind::StyleStartTagName,
        _ => TokenKind::StartTagName,
    }
}

pub fn tag_names(scanner: &Scanner) -> Vec<String> {
    scanner
        .tags()
        .iter()
        .map(|tag| {
            tag.custom_name()
                .or(tag.kind().name())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
