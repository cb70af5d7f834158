/// Character cursor provided by the host parser.
///
/// The scanner never owns input: it peeks at the current code point,
/// advances over it and marks where the produced token ends. If `mark_end`
/// is never called, the token ends wherever the cursor stopped.
pub trait Lexer {
    /// Current code point, or `None` at the end of the input.
    fn lookahead(&self) -> Option<char>;

    /// Moves past the current code point. Skipped code points are not
    /// included in the produced token.
    fn advance(&mut self, skip: bool);

    /// Records the current position as the end of the produced token.
    /// The last call before the scanner returns wins.
    fn mark_end(&mut self);

    #[inline]
    fn consume(&mut self) {
        self.advance(false);
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while self.lookahead().is_some_and(char::is_whitespace) {
            self.advance(true);
        }
    }

    #[inline]
    fn is_at(&self, ch: char) -> bool {
        self.lookahead() == Some(ch)
    }
}

/// In-memory [`Lexer`] over a string slice.
///
/// Keeps track of the token boundaries the same way a tree-sitter lexer
/// does: skipped whitespace moves the token start, `mark_end` pins the
/// token end.
#[derive(Debug, Clone)]
pub struct StrLexer<'i> {
    input: &'i str,
    pos: usize,
    token_start: usize,
    marked_end: Option<usize>,
}

impl<'i> StrLexer<'i> {
    #[inline]
    pub fn new(input: &'i str) -> Self {
        Self::at(input, 0)
    }

    /// Creates a lexer positioned at the byte offset `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on a character boundary of `input`.
    pub fn at(input: &'i str, pos: usize) -> Self {
        assert!(
            input.is_char_boundary(pos),
            "Lexer position should be on a character boundary"
        );

        StrLexer {
            input,
            pos,
            token_start: pos,
            marked_end: None,
        }
    }

    #[inline]
    pub fn input(&self) -> &'i str {
        self.input
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.marked_end.unwrap_or(self.pos)
    }

    #[inline]
    pub fn token_text(&self) -> &'i str {
        &self.input[self.token_start..self.token_end().max(self.token_start)]
    }

    /// Starts a new token at the end of the previous one, discarding any
    /// lookahead the scanner performed past that end.
    pub fn next_token(&mut self) {
        let end = self.token_end().max(self.token_start);

        self.pos = end;
        self.token_start = end;
        self.marked_end = None;
    }

    /// Rewinds to the start of the current token, discarding all progress.
    pub fn reset_token(&mut self) {
        self.pos = self.token_start;
        self.marked_end = None;
    }
}

impl Lexer for StrLexer<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self, skip: bool) {
        if let Some(ch) = self.lookahead() {
            self.pos += ch.len_utf8();

            if skip {
                self.token_start = self.pos;
            }
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }
}
