mod errors;
mod expressions;

use super::*;
use crate::parser::test_utils::tokenize;

fn parse_str(input: &str) -> Result<Expr, ParseError> {
    parse(&tokenize(input))
}
