//! Grammar-driven parsers can't decide some token boundaries of component
//! markup on their own: whether `<` starts an end tag or first needs the
//! innermost element to be closed, where `<script>` or `<style>` content ends, or
//! where an embedded expression ends given nested braces and quoted literals.
//!
//! The scanner makes these decisions, tracking the stack of open elements
//! between invocations. The stack is the only state of the scanner and it can be
//! persisted and restored by the host, so scanning can be resumed at any token
//! boundary after an edit of the document.

mod comment;
mod expression;
mod raw_text;
mod settings;
mod state;
mod tag_name;
mod tag_stack;
mod token_kind;

use self::comment::scan_comment;
use self::expression::{is_directive_marker, scan_expression, ExpressionKind};
use crate::base::Lexer;

pub use self::settings::{ScannerSettings, TREE_SITTER_SERIALIZATION_BUFFER_SIZE};
pub use self::tag_stack::TagStack;
pub use self::token_kind::{TokenKind, ValidSymbols, TOKEN_KIND_COUNT};

#[derive(Debug, Default)]
pub struct Scanner {
    tags: TagStack,
    settings: ScannerSettings,
}

impl Scanner {
    #[inline]
    pub fn new() -> Self {
        Scanner::with_settings(ScannerSettings::default())
    }

    #[inline]
    pub fn with_settings(settings: ScannerSettings) -> Self {
        Scanner {
            tags: TagStack::with_capacity(settings.stack_capacity),
            settings,
        }
    }

    /// Currently open elements, innermost last.
    #[inline]
    pub fn tags(&self) -> &TagStack {
        &self.tags
    }

    /// Produces at most one token at the cursor. `None` means that the scanner
    /// has no opinion about the input and the grammar should try its own rules;
    /// any progress made by the cursor should be disregarded in this case.
    pub fn scan(&mut self, lexer: &mut impl Lexer, valid_symbols: ValidSymbols) -> Option<TokenKind> {
        lexer.skip_whitespace();

        trace!(@scan lexer.lookahead(), valid_symbols, self.tags.len());

        let token_kind = self.scan_token(lexer, valid_symbols);

        trace!(@token token_kind);

        token_kind
    }

    fn scan_token(&mut self, lexer: &mut impl Lexer, valid_symbols: ValidSymbols) -> Option<TokenKind> {
        let accepts = |symbols: ValidSymbols| valid_symbols.contains(symbols);

        if accepts(ValidSymbols::RAW_TEXT_EXPR | ValidSymbols::RAW_TEXT_AWAIT) {
            return scan_expression(lexer, ExpressionKind::Await);
        }

        if accepts(ValidSymbols::RAW_TEXT_EXPR | ValidSymbols::RAW_TEXT_EACH) {
            return scan_expression(lexer, ExpressionKind::Each);
        }

        if accepts(ValidSymbols::RAW_TEXT_EXPR) && !is_directive_marker(lexer.lookahead()) {
            return scan_expression(lexer, ExpressionKind::Plain);
        }

        let accepts_tag_names = valid_symbols
            .intersects(ValidSymbols::START_TAG_NAME | ValidSymbols::END_TAG_NAME);

        if accepts(ValidSymbols::RAW_TEXT) && !accepts_tag_names {
            return self.scan_raw_text(lexer);
        }

        match lexer.lookahead() {
            Some('<') => {
                // NOTE: implicit end tags are zero-width and end before `<`.
                lexer.mark_end();
                lexer.consume();

                if lexer.is_at('!') {
                    lexer.consume();

                    return scan_comment(lexer);
                }

                if accepts(ValidSymbols::IMPLICIT_END_TAG) {
                    return self.scan_implicit_end_tag(lexer);
                }
            }
            None if accepts(ValidSymbols::IMPLICIT_END_TAG) => {
                return self.scan_implicit_end_tag(lexer);
            }
            Some('/') if accepts(ValidSymbols::SELF_CLOSING_TAG_DELIMITER) => {
                return self.scan_self_closing_tag_delimiter(lexer);
            }
            Some(_) if accepts_tag_names && !accepts(ValidSymbols::RAW_TEXT) => {
                return if accepts(ValidSymbols::START_TAG_NAME) {
                    self.scan_start_tag_name(lexer)
                } else {
                    self.scan_end_tag_name(lexer)
                };
            }
            _ => (),
        }

        None
    }

    /// Writes the open element stack into `buffer` and returns the number of
    /// bytes written. Elements that don't fit are dropped from the snapshot,
    /// but the stack depth is always preserved.
    #[inline]
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        self.tags.encode_into(buffer)
    }

    /// Serializes the state into a buffer of the configured capacity.
    pub fn serialize_to_vec(&self) -> Vec<u8> {
        let mut buffer = vec![0; self.settings.state_buffer_capacity];
        let len = self.serialize(&mut buffer);

        buffer.truncate(len);

        buffer
    }

    /// Replaces the open element stack with the one stored in `buffer`. An
    /// empty buffer resets the scanner. Malformed state is discarded.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        self.tags = match TagStack::decode(buffer) {
            Ok(tags) => tags,
            Err(_err) => {
                trace!(@state "discarding malformed state: {}", _err);

                TagStack::with_capacity(self.settings.stack_capacity)
            }
        };
    }
}
