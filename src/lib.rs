//! External scanner for Svelte component templates.
//!
//! A tree-sitter grammar hands the tokens it can't recognize with its own
//! rules over to the external scanner: tag names that open and close elements,
//! end tags implied by the markup, raw `<script>` and `<style>` content,
//! embedded `{...}` expressions and comments. The [`Scanner`] tracks open
//! elements between invocations and reads the input through a [`Lexer`].
//!
//! ```
//! use svelte_scanner::{Scanner, StrLexer, TokenKind, ValidSymbols};
//!
//! let mut scanner = Scanner::new();
//! let mut lexer = StrLexer::new("ul><li>");
//!
//! assert_eq!(
//!     scanner.scan(&mut lexer, ValidSymbols::START_TAG_NAME),
//!     Some(TokenKind::StartTagName)
//! );
//! assert_eq!(lexer.token_text(), "ul");
//! assert_eq!(scanner.tags().len(), 1);
//! ```

#[macro_use]
mod base;

mod errors;
mod html;
mod scanner;

pub use self::base::{Lexer, StrLexer};
pub use self::errors::StateDecodeError;
pub use self::html::{LocalNameHash, Tag, TagKind};
pub use self::scanner::{
    Scanner, ScannerSettings, TagStack, TokenKind, ValidSymbols, TOKEN_KIND_COUNT,
    TREE_SITTER_SERIALIZATION_BUFFER_SIZE,
};
