use rcalc_eval::EvalError;
use rcalc_lexer::LexError;
use rcalc_parser::parser::{render_snippet, Diagnostic};
use rcalc_parser::ParseError;

/// Any failure of the lex → parse → evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Byte offset in the input the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CalcError::Lex(err) => Some(err.offset()),
            CalcError::Parse(err) => err.offset(),
            CalcError::Eval(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            CalcError::Lex(err) => {
                let diagnostic = Diagnostic::at_offset(err.offset(), err.to_string());
                match err {
                    LexError::UnexpectedCharacter { character: '.', .. } => {
                        diagnostic.with_help("Only integers are supported")
                    }
                    LexError::UnexpectedCharacter { .. } => diagnostic
                        .with_help("Expressions may contain digits, whitespace and + - * / ( )"),
                }
            }
            CalcError::Parse(err) => Diagnostic::from_parse_error(err),
            CalcError::Eval(err) => Diagnostic::unlocated(err.to_string()),
        }
    }

    /// Renders the error against its input with a caret under the offending
    /// position.
    pub fn render(&self, source: &str) -> String {
        render_snippet(&self.diagnostic(), source)
    }
}
