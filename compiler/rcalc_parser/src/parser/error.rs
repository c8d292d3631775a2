use nom::error::ErrorKind;
use rcalc_lexer::Token;

use super::token_stream::TokenSlice;

/// A grammar violation found while parsing a token sequence.
///
/// Every variant that concerns a concrete token carries that token's byte
/// offset in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `primary` saw neither a number nor `(`.
    #[error("expected literal or '(' at offset {offset}, found {found}")]
    ExpectedOperand { offset: usize, found: String },

    /// A parenthesised expression was not closed.
    #[error("expected ')' at offset {offset}, found {found}")]
    ExpectedClosingParen { offset: usize, found: String },

    /// A complete expression was followed by more tokens.
    #[error("trailing input at offset {offset}: {found}")]
    TrailingInput { offset: usize, found: String },

    /// Digit text that does not fit a signed 64-bit integer.
    #[error("invalid integer literal {lexeme:?} at offset {offset}")]
    InvalidNumber { offset: usize, lexeme: String },

    /// Parentheses opened past [`MAX_NESTING`](super::MAX_NESTING) levels.
    #[error("parentheses nested deeper than {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    /// An operator whose node would sit deeper than
    /// [`MAX_TREE_DEPTH`](super::MAX_TREE_DEPTH) levels in the tree.
    #[error("expression deeper than {limit} levels at offset {offset}")]
    ExpressionTooDeep { offset: usize, limit: usize },

    /// The token slice was empty or did not end with an end-of-input token.
    #[error("token sequence is not terminated by end of input")]
    MissingEndOfInput,

    /// A combinator-level failure.
    #[error("syntax error ({kind:?}) at offset {offset}")]
    Syntax { kind: ErrorKind, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending token, when one is known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::ExpectedOperand { offset, .. }
            | ParseError::ExpectedClosingParen { offset, .. }
            | ParseError::TrailingInput { offset, .. }
            | ParseError::InvalidNumber { offset, .. }
            | ParseError::NestingTooDeep { offset, .. }
            | ParseError::ExpressionTooDeep { offset, .. }
            | ParseError::Syntax { offset, .. } => Some(*offset),
            ParseError::MissingEndOfInput => None,
        }
    }

    pub(crate) fn expected_operand(token: &Token) -> Self {
        ParseError::ExpectedOperand {
            offset: token.position(),
            found: describe(token),
        }
    }

    pub(crate) fn expected_closing_paren(token: &Token) -> Self {
        ParseError::ExpectedClosingParen {
            offset: token.position(),
            found: describe(token),
        }
    }

    pub(crate) fn trailing_input(token: &Token) -> Self {
        ParseError::TrailingInput {
            offset: token.position(),
            found: describe(token),
        }
    }
}

/// Human-readable name of a token for error messages.
pub(crate) fn describe(token: &Token) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else {
        format!("'{}'", token.lexeme)
    }
}

impl<'a> nom::error::ParseError<TokenSlice<'a>> for ParseError {
    fn from_error_kind(input: TokenSlice<'a>, kind: ErrorKind) -> Self {
        ParseError::Syntax {
            kind,
            offset: input.current().position(),
        }
    }

    // The innermost error is the most precise one; keep it.
    fn append(_input: TokenSlice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
