//! Lexing
//!
//!     Two layers: a logos lexer that splits text outside of tags into plain runs,
//!     escapes and tag openers, and a hand-written tag reader that takes over at every
//!     `<` because tag bodies carry quote state the regular lexer cannot track.

pub mod tag;
pub mod tokens;

pub use tag::{read_tag, split_args, TagToken};
pub use tokens::Lexeme;
