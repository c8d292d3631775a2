//! rcalc: an integer arithmetic expression evaluator.
//!
//! Input text goes through three stages, each in its own crate:
//! [`rcalc_lexer`] scans it into tokens, [`rcalc_parser`] builds an
//! expression tree and [`rcalc_eval`] reduces the tree to an `i64`.
//! [`evaluate_expression`] chains them and stops at the first failure.
//!
//! ```
//! assert_eq!(rcalc::evaluate_expression("2 + 3 * 4"), Ok(14));
//! assert!(rcalc::evaluate_expression("1 / 0").is_err());
//! ```

pub mod error;
pub mod repl;

pub use error::CalcError;
pub use rcalc_ast::{BinaryOperator, Expr};
pub use rcalc_eval::{evaluate, EvalError};
pub use rcalc_lexer::{tokenize, LexError, Token};
pub use rcalc_parser::{parse, ParseError};
pub use repl::{ReplConfig, ReplOutcome, ReplSession};

/// Lexes, parses and evaluates one expression.
pub fn evaluate_expression(input: &str) -> Result<i64, CalcError> {
    let tokens = tokenize(input)?;
    let ast = parse(&tokens)?;
    let value = evaluate(&ast)?;
    log::debug!("{input:?} => {value}");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_errors_are_tagged() {
        assert!(matches!(
            evaluate_expression("1+@"),
            Err(CalcError::Lex(_))
        ));
        assert!(matches!(
            evaluate_expression("(1+2"),
            Err(CalcError::Parse(_))
        ));
        assert!(matches!(
            evaluate_expression("1/0"),
            Err(CalcError::Eval(EvalError::DivisionByZero))
        ));
    }

    #[test]
    fn test_lex_error_short_circuits_parse() {
        // The unbalanced paren is never reported: lexing fails first
        assert!(matches!(
            evaluate_expression("(1 + $"),
            Err(CalcError::Lex(_))
        ));
    }
}
