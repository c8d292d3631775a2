//! Recursive-descent parser for rcalc expressions.
//!
//! The grammar functions are `nom` parsers over a [`TokenSlice`] cursor; see
//! [`expressions`] for the rules. [`parse`] is the entry point: it parses one
//! expression and insists that nothing but the end-of-input token follows.

use nom::error::{ErrorKind, ParseError as _};
use nom::IResult;

use rcalc_ast::Expr;
use rcalc_lexer::Token;

pub mod diagnostics;
pub mod error;
pub mod expressions;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod token_stream;

pub use diagnostics::{render_snippet, Diagnostic};
pub use error::ParseError;
pub use expressions::parse_expression;
pub use token_stream::TokenSlice;

/// Deepest parenthesis nesting the grammar rules will descend into.
pub const MAX_NESTING: usize = 256;

/// Deepest tree the parser will build, counted in binary levels.
///
/// Evaluation, printing and dropping all recurse once per level; bounding the
/// tree here keeps them within the stack.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Result of a single grammar rule.
pub type ParseResult<'a, T> = IResult<TokenSlice<'a>, T, ParseError>;

/// Parses a complete token sequence into one expression tree.
///
/// The sequence must end with the lexer's end-of-input token and every other
/// token must be consumed by the expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let input = TokenSlice::new(tokens)?;
    let (rest, expr) = parse_expression(input).map_err(|err| match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        // Token input is always complete
        nom::Err::Incomplete(_) => ParseError::from_error_kind(input, ErrorKind::Complete),
    })?;

    if !rest.is_at_end() {
        log::debug!("trailing input starting at {}", rest.current());
        return Err(ParseError::trailing_input(rest.current()));
    }

    log::debug!("parsed expression {expr}");
    Ok(expr)
}

/// Parses with diagnostics: on failure, returns a [`Diagnostic`] instead of
/// the raw error.
pub fn parse_with_diagnostics(tokens: &[Token]) -> Result<Expr, Diagnostic> {
    parse(tokens).map_err(|err| Diagnostic::from_parse_error(&err))
}

#[cfg(test)]
mod tests;
