use super::*;
use pretty_assertions::assert_eq;
use rcalc_ast::BinaryOperator::{Add, Div, Mul, Sub};

fn num(value: i64) -> Expr {
    Expr::number(value)
}

#[test]
fn test_single_literal() {
    assert_eq!(parse_str("7").unwrap(), num(7));
    assert_eq!(parse_str("0").unwrap(), num(0));
    assert_eq!(parse_str("007").unwrap(), num(7));
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse_str("2+3*4").unwrap(),
        Expr::binary(Add, num(2), Expr::binary(Mul, num(3), num(4)))
    );
    assert_eq!(
        parse_str("2*3+4").unwrap(),
        Expr::binary(Add, Expr::binary(Mul, num(2), num(3)), num(4))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse_str("(2+3)*4").unwrap(),
        Expr::binary(Mul, Expr::binary(Add, num(2), num(3)), num(4))
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(
        parse_str("8-3-2").unwrap(),
        Expr::binary(Sub, Expr::binary(Sub, num(8), num(3)), num(2))
    );
    assert_eq!(
        parse_str("8/4/2").unwrap(),
        Expr::binary(Div, Expr::binary(Div, num(8), num(4)), num(2))
    );
    assert_eq!(parse_str("1-2+3").unwrap().to_string(), "((1 - 2) + 3)");
    assert_eq!(parse_str("1*2/3*4").unwrap().to_string(), "(((1 * 2) / 3) * 4)");
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse_str(" 1 + 2 ").unwrap(), parse_str("1+2").unwrap());
    assert_eq!(
        parse_str("\t(1\n*\n2)\r\n").unwrap(),
        parse_str("(1*2)").unwrap()
    );
}

#[test]
fn test_mixed_expression_shape() {
    let expr = parse_str("1 + 2 * (3 - 4) / 5 - 6").unwrap();
    assert_eq!(expr.to_string(), "((1 + ((2 * (3 - 4)) / 5)) - 6)");
    assert_eq!(expr.depth(), 5);
}

#[test]
fn test_deep_nesting() {
    let depth = 200;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_str(&input).unwrap(), num(1));
}

#[test]
fn test_reparse_of_rendering_is_identical() {
    for input in ["1", "2+3*4", "(2+3)*4", "8-3-2", "8/4/2", "1-(2-(3-4))"] {
        let expr = parse_str(input).unwrap();
        let reparsed = parse_str(&expr.to_string()).unwrap();
        assert_eq!(reparsed, expr, "input {input:?}");
    }
}
