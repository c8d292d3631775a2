//! Line-oriented REPL session.
//!
//! [`ReplSession`] holds no I/O: the binary feeds it one line at a time and
//! prints whatever [`ReplOutcome::render`] returns. A failing line never ends
//! the session.

use rcalc_ast::AstPrinter;
use rcalc_lexer::format_tokens;

use crate::{evaluate_expression, parse, tokenize, CalcError};

pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

const HELP: &str = "\
enter an expression such as (1 + 2) * 3
commands:
  :tokens <expr>  show the token table
  :ast <expr>     show the syntax tree
  :json <expr>    show the syntax tree as JSON
  :help           show this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Line that ends the session
    pub exit_keyword: String,
    /// Render a caret diagnostic under the generic error marker
    pub diagnostics: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
            diagnostics: false,
        }
    }
}

/// What one input line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Empty line; prompt again
    Skip,
    /// The exit keyword was entered
    Exit,
    Value(i64),
    /// Output of a `:` command
    Dump(String),
    Error {
        error: CalcError,
        /// Caret diagnostic, when enabled
        report: Option<String>,
    },
}

impl ReplOutcome {
    /// Text to print for this outcome, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            ReplOutcome::Skip | ReplOutcome::Exit => None,
            ReplOutcome::Value(value) => Some(format!("=> {value}")),
            ReplOutcome::Dump(text) => Some(text.trim_end().to_string()),
            ReplOutcome::Error { report: None, .. } => Some("=> error".to_string()),
            ReplOutcome::Error {
                report: Some(report),
                ..
            } => Some(format!("=> error\n{}", report.trim_end())),
        }
    }
}

#[derive(Debug)]
pub struct ReplSession {
    config: ReplConfig,
    line_number: usize,
}

impl ReplSession {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            config,
            line_number: 1,
        }
    }

    pub fn prompt(&self) -> String {
        format!("rcalc:{}>> ", self.line_number)
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Handles one raw input line. Every line advances the prompt counter,
    /// blank ones included.
    pub fn handle_line(&mut self, line: &str) -> ReplOutcome {
        self.line_number += 1;
        let input = strip_line_terminator(line);

        if input == self.config.exit_keyword {
            return ReplOutcome::Exit;
        }
        if input.is_empty() {
            return ReplOutcome::Skip;
        }

        let result = match input.strip_prefix(':') {
            Some(command) => self.handle_command(command),
            None => evaluate_expression(input).map(ReplOutcome::Value),
        };

        result.unwrap_or_else(|error| {
            log::info!("line {input:?} failed: {error}");
            let report = self
                .config
                .diagnostics
                .then(|| error.render(input));
            ReplOutcome::Error { error, report }
        })
    }

    fn handle_command(&self, command: &str) -> Result<ReplOutcome, CalcError> {
        let (name, argument) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));

        match name {
            "tokens" => {
                let tokens = tokenize(argument)?;
                Ok(ReplOutcome::Dump(format_tokens(&tokens)))
            }
            "ast" => {
                let ast = parse(&tokenize(argument)?)?;
                Ok(ReplOutcome::Dump(AstPrinter::new().print(&ast)))
            }
            "json" => {
                let ast = parse(&tokenize(argument)?)?;
                let dump = match rcalc_ast::to_json(&ast) {
                    Ok(json) => json,
                    Err(e) => format!("error: failed to serialize tree: {e}"),
                };
                Ok(ReplOutcome::Dump(dump))
            }
            "help" => Ok(ReplOutcome::Dump(HELP.to_string())),
            _ => Ok(ReplOutcome::Dump(format!(
                "error: unknown command ':{name}' (try :help)"
            ))),
        }
    }
}

impl Default for ReplSession {
    fn default() -> Self {
        Self::new(ReplConfig::default())
    }
}

fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
