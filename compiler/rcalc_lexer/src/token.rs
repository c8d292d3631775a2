//! Token model shared by the lexer and the parser.

use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column are 1-based and only used for diagnostics; the byte
/// offset (0-based) is the token's position proper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The reserved single-character symbols of the calculator language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Symbol {
    /// The source spelling of the symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
        }
    }
}

/// Represents the type of a token.
///
/// Number tokens keep their raw digit text in [`Token::lexeme`]; converting
/// it to an integer is left to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A maximal run of decimal digits
    Number,
    /// One of `+ - * / ( )`
    Operator(Symbol),
    /// Marks the end of the input; always the last token of a sequence
    EndOfInput,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Number => f.write_str("NUMBER"),
            TokenType::Operator(_) => f.write_str("OPERATOR"),
            TokenType::EndOfInput => f.write_str("EOF"),
        }
    }
}

/// Represents a token in the source code, including its type, lexeme, and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token (empty for end of input)
    pub lexeme: String,
    /// The location of the token in the source code
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Byte offset where the token starts.
    pub fn position(&self) -> usize {
        self.location.offset
    }

    /// Returns true for the end-of-input marker
    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::EndOfInput
    }

    /// Returns true if this token is the given operator symbol
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.token_type == TokenType::Operator(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.token_type, self.lexeme, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}

/// Renders a token sequence as a table with one token per row.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::from("kind\t\tlexeme\toffset\n");
    for token in tokens {
        out.push_str(&format!(
            "{:<8}\t{}\t{}\n",
            token.token_type.to_string(),
            token.lexeme,
            token.location.offset
        ));
    }
    out
}
