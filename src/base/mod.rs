#[macro_use]
mod debug_trace;

mod lexer;

pub use self::lexer::{Lexer, StrLexer};
