use static_assertions::{assert_eq_size, assert_impl_all, const_assert, const_assert_eq};
use svelte_scanner::*;

assert_impl_all!(Scanner: Send, Sync, Default);
assert_impl_all!(StrLexer<'static>: Lexer, Clone);
assert_impl_all!(StateDecodeError: std::error::Error, Send, Sync, Copy);
assert_eq_size!(TagKind, u8);
assert_eq_size!(TokenKind, u16);
const_assert!(TOKEN_KIND_COUNT <= u16::BITS as usize);
const_assert_eq!(TREE_SITTER_SERIALIZATION_BUFFER_SIZE, 1024);

#[test]
fn token_kind_ids_follow_grammar_externals() {
    let ids: Vec<u16> = TokenKind::ALL.iter().map(|kind| kind.id()).collect();

    assert_eq!(ids, (0..TOKEN_KIND_COUNT as u16).collect::<Vec<_>>());
    assert_eq!(TokenKind::StartTagName.id(), 0);
    assert_eq!(TokenKind::ImplicitEndTag.id(), 6);
    assert_eq!(TokenKind::Comment.id(), 11);
    assert_eq!(TokenKind::from_id(12), None);
}

#[test]
fn valid_symbols_from_host_flags() {
    let mut flags = [false; TOKEN_KIND_COUNT];

    flags[usize::from(TokenKind::RawTextExpr.id())] = true;
    flags[usize::from(TokenKind::RawTextEach.id())] = true;

    let valid_symbols = ValidSymbols::from_flags(&flags);

    assert_eq!(
        valid_symbols,
        ValidSymbols::RAW_TEXT_EXPR | ValidSymbols::RAW_TEXT_EACH
    );
    assert!(valid_symbols.accepts(TokenKind::RawTextEach));
    assert!(!valid_symbols.accepts(TokenKind::RawTextAwait));
}

#[test]
fn default_settings() {
    let settings = ScannerSettings::default();

    assert_eq!(settings.stack_capacity, 256);
    assert_eq!(
        settings.state_buffer_capacity,
        TREE_SITTER_SERIALIZATION_BUFFER_SIZE
    );
}

#[test]
fn decode_error_messages() {
    assert_eq!(
        TagStack::decode(&[1, 0]).unwrap_err().to_string(),
        "Serialized state of 2 bytes is too short to contain the tag count header."
    );

    assert_eq!(
        TagStack::decode(&[2, 0, 1, 0]).unwrap_err().to_string(),
        "Serialized state claims 2 serialized tags, which exceeds the total tag count of 1."
    );

    assert_eq!(
        TagStack::decode(&[1, 0, 1, 0, 0xFF]).unwrap_err().to_string(),
        "Tag record #0 has unknown tag kind `255`."
    );
}

#[test]
fn tag_classification() {
    assert_eq!(Tag::for_name("DIV"), Tag::Known(TagKind::Div));
    assert_eq!(Tag::for_name("Counter").custom_name(), Some("Counter"));
    assert_eq!(Tag::for_name("counter"), Tag::for_name("COUNTER"));
    assert!(Tag::for_name("wbr").is_void());
    assert!(!Tag::for_name("Tr").can_contain(&Tag::for_name("tr")));
    assert_eq!(TagKind::from_name_hash(LocalNameHash::from("textarea")), TagKind::Textarea);
}
