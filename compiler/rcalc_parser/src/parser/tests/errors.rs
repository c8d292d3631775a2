use super::*;
use crate::parser::test_utils::{create_number, create_operator};
use pretty_assertions::assert_eq;

#[test]
fn test_unclosed_paren() {
    assert_eq!(
        parse_str("(1+2").unwrap_err(),
        ParseError::ExpectedClosingParen {
            offset: 4,
            found: "end of input".to_string(),
        }
    );
    assert_eq!(
        parse_str("(1 2)").unwrap_err(),
        ParseError::ExpectedClosingParen {
            offset: 3,
            found: "'2'".to_string(),
        }
    );
}

#[test]
fn test_unmatched_close_paren() {
    assert_eq!(
        parse_str("1+2)").unwrap_err(),
        ParseError::TrailingInput {
            offset: 3,
            found: "')'".to_string(),
        }
    );
    assert_eq!(
        parse_str("1)").unwrap_err(),
        ParseError::TrailingInput {
            offset: 1,
            found: "')'".to_string(),
        }
    );
}

#[test]
fn test_trailing_number() {
    assert_eq!(
        parse_str("1 2").unwrap_err(),
        ParseError::TrailingInput {
            offset: 2,
            found: "'2'".to_string(),
        }
    );
}

#[test]
fn test_missing_operand() {
    let cases = [
        ("", 0, "end of input"),
        ("   ", 3, "end of input"),
        ("+1", 0, "'+'"),
        ("1+", 2, "end of input"),
        ("1*/2", 2, "'/'"),
        ("()", 1, "')'"),
        ("-5", 0, "'-'"),
        ("(1+)", 3, "')'"),
    ];
    for (input, offset, found) in cases {
        assert_eq!(
            parse_str(input).unwrap_err(),
            ParseError::ExpectedOperand {
                offset,
                found: found.to_string(),
            },
            "input {input:?}"
        );
    }
}

#[test]
fn test_literal_out_of_range() {
    assert_eq!(
        parse_str("1 + 9223372036854775808").unwrap_err(),
        ParseError::InvalidNumber {
            offset: 4,
            lexeme: "9223372036854775808".to_string(),
        }
    );
    assert_eq!(
        parse_str("9223372036854775807").unwrap(),
        Expr::number(i64::MAX)
    );
}

#[test]
fn test_unterminated_token_sequence() {
    let tokens = vec![create_number(1), create_operator("+"), create_number(2)];
    assert_eq!(parse(&tokens).unwrap_err(), ParseError::MissingEndOfInput);
    assert_eq!(parse(&[]).unwrap_err(), ParseError::MissingEndOfInput);
}

#[test]
fn test_error_offsets() {
    assert_eq!(parse_str("1 2").unwrap_err().offset(), Some(2));
    assert_eq!(ParseError::MissingEndOfInput.offset(), None);
}

#[test]
fn test_parse_with_diagnostics() {
    let diag = parse_with_diagnostics(&tokenize("(1")).unwrap_err();
    assert_eq!(diag.offset, Some(2));
    assert_eq!(diag.message, "expected ')' at offset 2, found end of input");
    assert!(diag.help.is_some());
}
