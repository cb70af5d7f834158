use super::TokenKind;
use crate::base::Lexer;

/// Flavours of directive expressions. `{#await}` and `{#each}` expressions can
/// be followed by a continuation keyword within the same braces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum ExpressionKind {
    Plain,
    Await,
    Each,
}

impl ExpressionKind {
    #[inline]
    fn continuation(self) -> Option<(&'static str, TokenKind)> {
        match self {
            ExpressionKind::Plain => None,
            ExpressionKind::Await => Some(("then", TokenKind::RawTextAwait)),
            ExpressionKind::Each => Some(("as", TokenKind::RawTextEach)),
        }
    }
}

/// Directive markers are tokenized by the grammar itself.
#[inline]
pub(super) fn is_directive_marker(ch: Option<char>) -> bool {
    matches!(ch, Some('@' | '#' | ':' | '/'))
}

#[inline]
fn is_keyword_boundary(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | ')')
}

/// Consumes a quoted literal after its opening quote. Fails if the input ends
/// before the closing quote.
fn skip_quoted(lexer: &mut impl Lexer, quote: char) -> Option<()> {
    loop {
        match lexer.lookahead()? {
            '\\' => {
                lexer.consume();
                lexer.lookahead()?;
            }
            ch if ch == quote => {
                lexer.consume();

                return Some(());
            }
            _ => (),
        }

        lexer.consume();
    }
}

/// Consumes `keyword` for as long as the input matches it. Succeeds only if
/// the whole keyword matched and is followed by whitespace or a brace.
fn scan_keyword(lexer: &mut impl Lexer, keyword: &str) -> bool {
    for expected in keyword.chars() {
        if !lexer.is_at(expected) {
            return false;
        }

        lexer.consume();
    }

    matches!(lexer.lookahead(), Some(ch) if ch.is_whitespace() || ch == '{' || ch == '}')
}

/// Scans an expression up to the `}` that closes the directive, skipping
/// balanced inner braces and quoted literals.
pub(super) fn scan_expression(lexer: &mut impl Lexer, kind: ExpressionKind) -> Option<TokenKind> {
    let continuation = kind.continuation();
    let mut depth = 0usize;

    while let Some(ch) = lexer.lookahead() {
        match ch {
            '{' => depth += 1,
            '}' if depth == 0 => {
                lexer.mark_end();

                return Some(TokenKind::RawTextExpr);
            }
            '}' => depth -= 1,
            '"' | '\'' | '`' => {
                lexer.consume();
                skip_quoted(lexer, ch)?;

                continue;
            }
            ch if is_keyword_boundary(ch) => {
                if let Some((keyword, token_kind)) = continuation {
                    // NOTE: closing parenthesis belongs to the expression, whitespace
                    // doesn't. The end is marked after `)` rather than before it, so
                    // `f(x)then v}` produces `f(x)` and not an unbalanced `f(x`.
                    if ch == ')' {
                        lexer.consume();
                        lexer.mark_end();
                    } else {
                        lexer.mark_end();
                        lexer.consume();
                    }

                    while lexer.lookahead().is_some_and(char::is_whitespace) {
                        lexer.consume();
                    }

                    if scan_keyword(lexer, keyword) {
                        return Some(token_kind);
                    }

                    // NOTE: the character that broke the keyword match hasn't been
                    // examined yet.
                    continue;
                }
            }
            _ => (),
        }

        lexer.consume();
    }

    None
}
