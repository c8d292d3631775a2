use nom::InputLength;
use rcalc_lexer::Token;

use super::error::ParseError;

/// A cursor over a token sequence that ends with an end-of-input token.
///
/// The cursor is a plain `Copy` value: parser functions take one and return
/// the advanced one, so there is no hidden shared position. It never moves
/// backwards and never moves past the final end-of-input token.
///
/// The cursor also carries how many parentheses enclose it, so the grammar
/// rules can bound their recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSlice<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Index of the current token; always within `tokens`
    index: usize,
    /// Open parentheses around the current position
    nesting: usize,
}

impl<'a> TokenSlice<'a> {
    /// Create a cursor at the first token.
    ///
    /// Fails unless the slice is terminated by an end-of-input token.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.is_eof() => Ok(TokenSlice {
                tokens,
                index: 0,
                nesting: 0,
            }),
            _ => Err(ParseError::MissingEndOfInput),
        }
    }

    /// The token under the cursor.
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    /// Move forward by one token. A no-op on the end-of-input token.
    #[must_use]
    pub fn advance(self) -> Self {
        if self.index + 1 < self.tokens.len() {
            TokenSlice {
                index: self.index + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Returns true once the cursor rests on the end-of-input token.
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// One level deeper inside parentheses.
    #[must_use]
    pub fn enter(self) -> Self {
        TokenSlice {
            nesting: self.nesting + 1,
            ..self
        }
    }

    /// One level back out of parentheses.
    #[must_use]
    pub fn leave(self) -> Self {
        TokenSlice {
            nesting: self.nesting.saturating_sub(1),
            ..self
        }
    }

    /// Number of open parentheses around the cursor.
    pub fn nesting(&self) -> usize {
        self.nesting
    }

    /// Index of the current token in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the remaining tokens as a slice, current token included
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.index..]
    }
}

impl InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.tokens.len() - self.index
    }
}
