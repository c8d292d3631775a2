use super::error::ParseError;

/// A user-facing diagnostic describing a problem in an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Byte offset the diagnostic points at, if it has a location
    pub offset: Option<usize>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a byte offset with a custom message
    pub fn at_offset<S: Into<String>>(offset: usize, message: S) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
            help: None,
        }
    }

    /// Create a diagnostic with no source location
    pub fn unlocated<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            offset: None,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Convert a parse error into a diagnostic with a hint where one helps
    pub fn from_parse_error(err: &ParseError) -> Self {
        let diagnostic = match err.offset() {
            Some(offset) => Diagnostic::at_offset(offset, err.to_string()),
            None => Diagnostic::unlocated(err.to_string()),
        };
        match help_for_parse_error(err) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

fn help_for_parse_error(err: &ParseError) -> Option<&'static str> {
    match err {
        ParseError::ExpectedClosingParen { .. } => Some("Did you forget a matching ')'?"),
        ParseError::TrailingInput { found, .. } if found == "')'" => {
            Some("Did you forget a matching '(' earlier?")
        }
        ParseError::TrailingInput { .. } => {
            Some("Two operands need an operator between them, e.g. '1 + 2'")
        }
        ParseError::ExpectedOperand { found, .. } if found == "'-'" => {
            Some("Negative numbers are not supported; write '0 - n' instead")
        }
        ParseError::ExpectedOperand { .. } => {
            Some("Operators need a number or a parenthesised expression on both sides")
        }
        ParseError::InvalidNumber { .. } => Some("Integers must fit in 64 bits"),
        ParseError::NestingTooDeep { .. } => Some("Remove redundant parentheses"),
        ParseError::ExpressionTooDeep { .. } => {
            Some("Split the calculation into shorter expressions")
        }
        ParseError::MissingEndOfInput | ParseError::Syntax { .. } => None,
    }
}

/// Render a diagnostic against its source with a caret under the offending
/// position:
///
/// ```text
/// error: expected ')' at offset 4, found end of input
///  --> 1:5
///   |
/// 1 | (1+2
///   |     ^
///   = help: Did you forget a matching ')'?
/// ```
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let mut out = format!("error: {}\n", diagnostic.message);

    if let Some(offset) = diagnostic.offset {
        let offset = clamp_to_char_boundary(source, offset);
        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);
        let line_no = source[..line_start].matches('\n').count() + 1;
        let column = source[line_start..offset].chars().count() + 1;
        let text = source[line_start..line_end].trim_end_matches('\r');
        let gutter = " ".repeat(line_no.to_string().len());

        out.push_str(&format!("{gutter}--> {line_no}:{column}\n"));
        out.push_str(&format!("{gutter} |\n"));
        out.push_str(&format!("{line_no} | {text}\n"));
        out.push_str(&format!("{gutter} | {}^\n", " ".repeat(column - 1)));
    }

    if let Some(help) = &diagnostic.help {
        out.push_str(&format!("  = help: {help}\n"));
    }
    out
}

fn clamp_to_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
