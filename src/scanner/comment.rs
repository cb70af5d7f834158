use super::TokenKind;
use crate::base::Lexer;

/// Scans a comment after the `<!` that opens it. The comment ends at the
/// first `>` preceded by at least two dashes.
pub(super) fn scan_comment(lexer: &mut impl Lexer) -> Option<TokenKind> {
    for _ in 0..2 {
        if !lexer.is_at('-') {
            return None;
        }

        lexer.consume();
    }

    let mut dashes = 0usize;

    while let Some(ch) = lexer.lookahead() {
        match ch {
            '-' => dashes += 1,
            '>' if dashes >= 2 => {
                lexer.consume();
                lexer.mark_end();

                return Some(TokenKind::Comment);
            }
            _ => dashes = 0,
        }

        lexer.consume();
    }

    None
}
