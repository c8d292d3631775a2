//! rcalc lexical analyzer
//!
//! This crate provides lexical analysis for the calculator language,
//! converting source text into a sequence of tokens for the parser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{format_tokens, Location, Symbol, Token, TokenType};
