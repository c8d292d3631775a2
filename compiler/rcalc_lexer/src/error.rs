//! Lexing errors.

use crate::token::Location;

/// An error raised while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no valid token.
    #[error("unexpected character {character:?} at offset {}", .location.offset)]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        location: Location,
    },
}

impl LexError {
    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { location, .. } => location.offset,
        }
    }
}
