use nom::combinator::cut;
use nom::error::{ErrorKind, ParseError as _};
use nom::multi::many0;
use nom::sequence::pair;

use rcalc_ast::{BinaryOperator, Expr};
use rcalc_lexer::{Symbol, TokenType};

use super::{ParseError, ParseResult, TokenSlice, MAX_NESTING, MAX_TREE_DEPTH};

/// Parses an expression.
///
/// ```text
/// expr    := add
/// add     := mul (('+' | '-') mul)*
/// mul     := primary (('*' | '/') primary)*
/// primary := NUMBER | '(' expr ')'
/// ```
pub fn parse_expression(input: TokenSlice<'_>) -> ParseResult<'_, Expr> {
    log::trace!("parse_expression at token {}", input.index());
    parse_additive(input)
}

/// `add := mul (('+' | '-') mul)*`, folded to the left.
pub fn parse_additive(input: TokenSlice<'_>) -> ParseResult<'_, Expr> {
    let (input, first) = parse_multiplicative(input)?;
    let (input, rest) = many0(pair(
        binary_operator(&[BinaryOperator::Add, BinaryOperator::Sub]),
        cut(parse_multiplicative),
    ))(input)?;
    let expr = fold_left(first, rest).map_err(nom::Err::Failure)?;
    Ok((input, expr))
}

/// `mul := primary (('*' | '/') primary)*`, folded to the left.
pub fn parse_multiplicative(input: TokenSlice<'_>) -> ParseResult<'_, Expr> {
    let (input, first) = parse_primary(input)?;
    let (input, rest) = many0(pair(
        binary_operator(&[BinaryOperator::Mul, BinaryOperator::Div]),
        cut(parse_primary),
    ))(input)?;
    let expr = fold_left(first, rest).map_err(nom::Err::Failure)?;
    Ok((input, expr))
}

/// `primary := NUMBER | '(' expr ')'`
pub fn parse_primary(input: TokenSlice<'_>) -> ParseResult<'_, Expr> {
    let token = input.current();
    match token.token_type {
        TokenType::Number => {
            let value = token.lexeme.parse::<i64>().map_err(|_| {
                nom::Err::Failure(ParseError::InvalidNumber {
                    offset: token.position(),
                    lexeme: token.lexeme.clone(),
                })
            })?;
            Ok((input.advance(), Expr::Number(value)))
        }
        TokenType::Operator(Symbol::LeftParen) => {
            if input.nesting() >= MAX_NESTING {
                log::debug!("nesting limit reached at offset {}", token.position());
                return Err(nom::Err::Failure(ParseError::NestingTooDeep {
                    offset: token.position(),
                    limit: MAX_NESTING,
                }));
            }
            log::trace!("parenthesised expression at offset {}", token.position());
            let (input, expr) = cut(parse_expression)(input.advance().enter())?;
            let closing = input.current();
            if !closing.is_symbol(Symbol::RightParen) {
                log::debug!("unclosed '(' opened at offset {}", token.position());
                return Err(nom::Err::Failure(ParseError::expected_closing_paren(
                    closing,
                )));
            }
            Ok((input.advance().leave(), expr))
        }
        TokenType::Operator(_) | TokenType::EndOfInput => {
            log::debug!("expected operand, found {token}");
            Err(nom::Err::Error(ParseError::expected_operand(token)))
        }
    }
}

/// An operator together with the byte offset it was read at.
type Located = (BinaryOperator, usize);

/// Matches one of `accepted` and consumes it.
fn binary_operator<'a>(
    accepted: &'static [BinaryOperator],
) -> impl FnMut(TokenSlice<'a>) -> ParseResult<'a, Located> {
    move |input: TokenSlice<'a>| {
        let token = input.current();
        if let TokenType::Operator(symbol) = token.token_type {
            if let Ok(operator) = BinaryOperator::try_from(symbol) {
                if accepted.contains(&operator) {
                    return Ok((input.advance(), (operator, token.position())));
                }
            }
        }
        Err(nom::Err::Error(ParseError::from_error_kind(
            input,
            ErrorKind::Tag,
        )))
    }
}

/// Folds `first (op rhs)*` into a left-leaning tree: `((first op rhs) op rhs)`.
///
/// Every operand was built under the same bound, so measuring it is safe.
/// Fails at the first operator whose node would exceed [`MAX_TREE_DEPTH`].
fn fold_left(first: Expr, rest: Vec<(Located, Expr)>) -> Result<Expr, ParseError> {
    let mut depth = first.depth();
    let mut tree = first;
    for ((operator, offset), right) in rest {
        depth = depth.max(right.depth()) + 1;
        if depth > MAX_TREE_DEPTH {
            log::debug!("tree depth limit reached at offset {offset}");
            return Err(ParseError::ExpressionTooDeep {
                offset,
                limit: MAX_TREE_DEPTH,
            });
        }
        tree = Expr::binary(operator, tree, right);
    }
    Ok(tree)
}
