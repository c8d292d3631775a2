//! Test utilities for the parser

#![allow(dead_code)]

use rcalc_lexer::token::{Location, Symbol, Token, TokenType};

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Location::default())
}

/// Creates a number token for testing
pub fn create_number(value: i64) -> Token {
    let s = value.to_string();
    create_token(TokenType::Number, &s)
}

/// Creates an operator token for testing
pub fn create_operator(op: &str) -> Token {
    let symbol = match op {
        "+" => Symbol::Plus,
        "-" => Symbol::Minus,
        "*" => Symbol::Star,
        "/" => Symbol::Slash,
        "(" => Symbol::LeftParen,
        ")" => Symbol::RightParen,
        _ => panic!("Unknown operator: {}", op),
    };
    create_token(TokenType::Operator(symbol), op)
}

/// Creates the end-of-input token at a byte offset
pub fn eof_at(offset: usize) -> Token {
    Token::new(
        TokenType::EndOfInput,
        "",
        Location {
            line: 1,
            column: offset + 1,
            offset,
        },
    )
}

/// Tokenizes a string for testing
pub fn tokenize(input: &str) -> Vec<Token> {
    rcalc_lexer::tokenize(input).expect("test input should lex")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_token() {
        let token = create_operator("+");
        assert_eq!(token.token_type, TokenType::Operator(Symbol::Plus));
        assert_eq!(token.lexeme, "+");
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("1 + 2");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[1].token_type, TokenType::Operator(Symbol::Plus));
        assert_eq!(tokens[2].token_type, TokenType::Number);
        assert_eq!(tokens[3].token_type, TokenType::EndOfInput);
    }
}
