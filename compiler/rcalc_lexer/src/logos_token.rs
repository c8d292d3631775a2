//! The raw logos scanner underneath [`crate::Lexer`].

use logos::Logos;

/// Raw token type produced by the logos scanner.
///
/// Whitespace is skipped one character per match; anything not listed here
/// surfaces as a scanner error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\v]")]
pub enum LogosToken {
    /// Integer literal, kept as raw digit text
    #[regex(r"[0-9]+")]
    Number,

    // Operators
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}
