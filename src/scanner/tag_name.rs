use super::{Scanner, TokenKind};
use crate::base::Lexer;
use crate::html::{Tag, TagKind};

#[inline]
fn is_tag_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == ':'
}

/// Consumes a tag name. Returns `None` if there is no tag name at the cursor.
fn scan_tag_name(lexer: &mut impl Lexer) -> Option<String> {
    let mut name = String::new();

    while let Some(ch) = lexer.lookahead().filter(|&ch| is_tag_name_char(ch)) {
        name.push(ch);
        lexer.consume();
    }

    (!name.is_empty()).then_some(name)
}

impl Scanner {
    #[inline]
    fn close_implicitly(&mut self) -> TokenKind {
        self.tags.pop();

        TokenKind::ImplicitEndTag
    }

    /// Decides whether the innermost open element needs to be closed before
    /// the markup at the cursor (which follows a `<`, or is the end of the
    /// input) can be parsed. Closes at most one element per call.
    pub(super) fn scan_implicit_end_tag(&mut self, lexer: &mut impl Lexer) -> Option<TokenKind> {
        let parent = self.tags.peek()?;

        if lexer.lookahead().is_none() {
            return Some(self.close_implicitly());
        }

        let is_closing_tag = lexer.is_at('/');

        if is_closing_tag {
            lexer.consume();
        } else if parent.is_void() {
            return Some(self.close_implicitly());
        }

        let next_tag = Tag::for_name(&scan_tag_name(lexer)?);

        if is_closing_tag {
            // NOTE: the end tag closes the innermost element, so it's up to
            // the end tag name scanner to handle it.
            if self.tags.peek() == Some(&next_tag) {
                return None;
            }

            // NOTE: the end tag closes one of the ancestors. Unwind the stack
            // one element at a time until the ancestor is on top.
            if self.tags.contains_equal(&next_tag) {
                return Some(self.close_implicitly());
            }
        } else if !parent_can_contain(self.tags.peek(), &next_tag) {
            return Some(self.close_implicitly());
        }

        None
    }

    pub(super) fn scan_start_tag_name(&mut self, lexer: &mut impl Lexer) -> Option<TokenKind> {
        let tag = Tag::for_name(&scan_tag_name(lexer)?);

        let token_kind = match tag.kind() {
            TagKind::Script => TokenKind::ScriptStartTagName,
            TagKind::Style => TokenKind::StyleStartTagName,
            _ => TokenKind::StartTagName,
        };

        self.tags.push(tag);

        Some(token_kind)
    }

    pub(super) fn scan_end_tag_name(&mut self, lexer: &mut impl Lexer) -> Option<TokenKind> {
        let tag = Tag::for_name(&scan_tag_name(lexer)?);

        Some(if self.tags.peek() == Some(&tag) {
            self.tags.pop();

            TokenKind::EndTagName
        } else {
            TokenKind::ErroneousEndTagName
        })
    }

    pub(super) fn scan_self_closing_tag_delimiter(
        &mut self,
        lexer: &mut impl Lexer,
    ) -> Option<TokenKind> {
        lexer.consume();

        if !lexer.is_at('>') || self.tags.is_empty() {
            return None;
        }

        lexer.consume();
        self.tags.pop();

        Some(TokenKind::SelfClosingTagDelimiter)
    }
}

#[inline]
fn parent_can_contain(parent: Option<&Tag>, child: &Tag) -> bool {
    parent.map_or(true, |parent| parent.can_contain(child))
}
