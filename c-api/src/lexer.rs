use super::*;

/// Lexer interface the tree-sitter runtime passes to external scanners.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`Lexer`] backed by the runtime's lexer. The pointer is only valid for the
/// duration of a single `scan` call.
pub(crate) struct HostLexer {
    raw: *mut TSLexer,
}

impl HostLexer {
    #[inline]
    pub fn new(raw: *mut TSLexer) -> Self {
        assert_not_null!(raw);

        HostLexer { raw }
    }

    #[inline]
    pub fn set_result_symbol(&mut self, kind: TokenKind) {
        unsafe { (*self.raw).result_symbol = kind.id() };
    }
}

impl Lexer for HostLexer {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        if unsafe { ((*self.raw).eof)(self.raw) } {
            return None;
        }

        // NOTE: the runtime reports undecodable input as negative or out of
        // range code points.
        let ch = u32::try_from(unsafe { (*self.raw).lookahead })
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        Some(ch)
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        unsafe { ((*self.raw).advance)(self.raw, skip) };
    }

    #[inline]
    fn mark_end(&mut self) {
        unsafe { ((*self.raw).mark_end)(self.raw) };
    }
}
