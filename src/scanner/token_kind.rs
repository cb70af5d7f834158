use bitflags::bitflags;

/// Tokens produced by the scanner.
///
/// Discriminants are the external token identifiers of the grammar, so the
/// order must match the grammar's `externals` list.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    StartTagName,
    ScriptStartTagName,
    StyleStartTagName,
    EndTagName,
    ErroneousEndTagName,
    SelfClosingTagDelimiter,
    ImplicitEndTag,
    RawText,
    RawTextExpr,
    RawTextAwait,
    RawTextEach,
    Comment,
}

pub const TOKEN_KIND_COUNT: usize = 12;

impl TokenKind {
    pub const ALL: [TokenKind; TOKEN_KIND_COUNT] = [
        TokenKind::StartTagName,
        TokenKind::ScriptStartTagName,
        TokenKind::StyleStartTagName,
        TokenKind::EndTagName,
        TokenKind::ErroneousEndTagName,
        TokenKind::SelfClosingTagDelimiter,
        TokenKind::ImplicitEndTag,
        TokenKind::RawText,
        TokenKind::RawTextExpr,
        TokenKind::RawTextAwait,
        TokenKind::RawTextEach,
        TokenKind::Comment,
    ];

    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    #[inline]
    pub fn from_id(id: u16) -> Option<TokenKind> {
        TokenKind::ALL.get(usize::from(id)).copied()
    }
}

bitflags! {
    /// Token kinds the grammar accepts at the current position.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct ValidSymbols: u16 {
        const START_TAG_NAME = 1 << 0;
        const SCRIPT_START_TAG_NAME = 1 << 1;
        const STYLE_START_TAG_NAME = 1 << 2;
        const END_TAG_NAME = 1 << 3;
        const ERRONEOUS_END_TAG_NAME = 1 << 4;
        const SELF_CLOSING_TAG_DELIMITER = 1 << 5;
        const IMPLICIT_END_TAG = 1 << 6;
        const RAW_TEXT = 1 << 7;
        const RAW_TEXT_EXPR = 1 << 8;
        const RAW_TEXT_AWAIT = 1 << 9;
        const RAW_TEXT_EACH = 1 << 10;
        const COMMENT = 1 << 11;
    }
}

impl ValidSymbols {
    /// Builds the set from a host array indexed by token kind identifier.
    /// Entries past the known token kinds are ignored.
    pub fn from_flags(flags: &[bool]) -> Self {
        flags
            .iter()
            .zip(TokenKind::ALL)
            .filter_map(|(&valid, kind)| valid.then_some(kind))
            .fold(ValidSymbols::empty(), |set, kind| set | ValidSymbols::from(kind))
    }

    #[inline]
    pub fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.into())
    }
}

impl From<TokenKind> for ValidSymbols {
    #[inline]
    fn from(kind: TokenKind) -> Self {
        ValidSymbols::from_bits_retain(1 << kind.id())
    }
}
