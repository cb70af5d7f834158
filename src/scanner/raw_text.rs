use super::{Scanner, TokenKind};
use crate::base::Lexer;
use crate::html::TagKind;

const SCRIPT_END_DELIMITER: &[u8] = b"</SCRIPT";
const STYLE_END_DELIMITER: &[u8] = b"</STYLE";

impl Scanner {
    /// Scans `<script>` or `<style>` content up to (but not including) the
    /// end tag of the innermost open element.
    pub(super) fn scan_raw_text(&mut self, lexer: &mut impl Lexer) -> Option<TokenKind> {
        let end_delimiter = match self.tags.peek()?.kind() {
            TagKind::Script => SCRIPT_END_DELIMITER,
            _ => STYLE_END_DELIMITER,
        };

        lexer.mark_end();

        let mut matched = 0;

        while let Some(ch) = lexer.lookahead() {
            if ch.to_ascii_uppercase() == char::from(end_delimiter[matched]) {
                matched += 1;

                if matched == end_delimiter.len() {
                    return Some(TokenKind::RawText);
                }

                lexer.consume();
            } else if matched > 0 {
                // NOTE: the failed delimiter prefix belongs to the text. Unlike a
                // naive matcher, the mismatching character isn't consumed here
                // and is checked once more as it may start the delimiter itself,
                // so `a<</script>` ends before `</script>` instead of running on
                // to the end of the input.
                matched = 0;
                lexer.mark_end();
            } else {
                lexer.consume();
                lexer.mark_end();
            }
        }

        // NOTE: unterminated raw text spans the rest of the input.
        lexer.mark_end();

        Some(TokenKind::RawText)
    }
}
