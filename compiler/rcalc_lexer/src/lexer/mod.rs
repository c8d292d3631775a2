//! Lexer implementation for the calculator language
//! Converts source text into a stream of tokens for the parser

use logos::Logos;

use crate::error::LexError;
use crate::token::{Location, Symbol, Token, TokenType};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source code being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset the line/column counters are synced to
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Set once the end-of-input token or an error has been produced
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
            finished: false,
        }
    }

    /// Advance the line/column counters up to `target`.
    /// Columns count characters, not bytes.
    fn sync_position_to(&mut self, target: usize) {
        let text = &self.source[self.offset..target];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\r' => {
                    // \r\n counts as a single line break
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }

        self.offset = target;
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(logos_token: LogosToken) -> TokenType {
        match logos_token {
            LogosToken::Number => TokenType::Number,
            LogosToken::Plus => TokenType::Operator(Symbol::Plus),
            LogosToken::Minus => TokenType::Operator(Symbol::Minus),
            LogosToken::Star => TokenType::Operator(Symbol::Star),
            LogosToken::Slash => TokenType::Operator(Symbol::Slash),
            LogosToken::LeftParen => TokenType::Operator(Symbol::LeftParen),
            LogosToken::RightParen => TokenType::Operator(Symbol::RightParen),
        }
    }

    /// Get the next token from the source code.
    ///
    /// Yields exactly one `EndOfInput` token after the last real token, then
    /// `None`. Lexing stops at the first unexpected character.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(logos_token)) => {
                let span = self.inner.span();
                self.sync_position_to(span.start);
                let token = Token::new(
                    Self::convert_token(logos_token),
                    self.inner.slice(),
                    self.location(),
                );
                #[cfg(feature = "logging")]
                log::trace!("lexed {token}");
                Some(Ok(token))
            }
            Some(Err(())) => {
                let span = self.inner.span();
                self.sync_position_to(span.start);
                self.finished = true;
                let character = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or_default();
                let err = LexError::UnexpectedCharacter {
                    character,
                    location: self.location(),
                };
                #[cfg(feature = "logging")]
                log::debug!("lexer error: {err}");
                Some(Err(err))
            }
            None => {
                self.sync_position_to(self.source.len());
                self.finished = true;
                Some(Ok(Token::new(TokenType::EndOfInput, "", self.location())))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scans `input` into a token sequence terminated by one `EndOfInput` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "logging")]
    log::debug!("tokenized {} tokens from {:?}", tokens.len(), input);
    Ok(tokens)
}
