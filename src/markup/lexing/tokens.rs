//! Token definitions for text outside of tags
//!
//! Only `<` and `\` are special outside a tag, so the lexer splits the input
//! into plain runs, escape sequences and tag openers. The tag body itself is
//! scanned by [read_tag](super::tag::read_tag), which knows about quotes.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    // Escapes
    #[token("\\<")]
    EscapedOpen,
    #[token("\\>")]
    EscapedClose,
    #[token("\\\\")]
    EscapedEscape,
    // A backslash that escapes nothing stays literal
    #[token("\\")]
    Backslash,

    #[token("<")]
    TagOpen,

    #[regex(r"[^<\\]+")]
    Text,
}

impl Lexeme {
    /// The literal text an escape sequence stands for.
    pub fn unescaped(&self) -> Option<char> {
        match self {
            Lexeme::EscapedOpen => Some('<'),
            Lexeme::EscapedClose => Some('>'),
            Lexeme::EscapedEscape | Lexeme::Backslash => Some('\\'),
            Lexeme::TagOpen | Lexeme::Text => None,
        }
    }
}
