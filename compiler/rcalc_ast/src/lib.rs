//! Abstract Syntax Tree (AST) for rcalc expressions.
//!
//! This crate defines the AST nodes produced by the parser, along with a
//! visitor for traversing them and helpers for printing and serializing them.

pub mod ast;
pub mod conversions;
pub mod visit;

// Re-export commonly used types
pub use ast::{BinaryExpr, BinaryOperator, Expr};
pub use visit::{Visitable, Visitor};

use std::convert::Infallible;
#[cfg(feature = "serde")]
use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result type for AST operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use rcalc_ast::{to_json, Expr};
///
/// let json = to_json(&Expr::number(42)).unwrap();
/// assert!(json.contains(r#""Number": 42"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// A utility for pretty-printing AST nodes as an indented tree.
///
/// ```text
/// Mul
///   Add
///     Number 1
///     Number 2
///   Number 3
/// ```
#[derive(Default)]
pub struct AstPrinter {
    indent: usize,
    out: String,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints an AST node to a string.
    pub fn print(mut self, node: &Expr) -> String {
        match node.accept(&mut self) {
            Ok(()) => self.out,
            Err(never) => match never {},
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Visitor for AstPrinter {
    type Output = ();
    type Error = Infallible;

    fn visit_number(&mut self, value: i64) -> visit::VisitResult<Self> {
        self.line(&format!("Number {value}"));
        Ok(())
    }

    fn visit_binary(&mut self, node: &BinaryExpr) -> visit::VisitResult<Self> {
        self.line(&format!("{:?}", node.operator));
        self.indent += 1;
        node.left.accept(self)?;
        node.right.accept(self)?;
        self.indent -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Expr {
        Expr::binary(
            BinaryOperator::Mul,
            Expr::binary(BinaryOperator::Add, Expr::number(1), Expr::number(2)),
            Expr::number(3),
        )
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization() -> Result<()> {
        let expr = sample();
        let json = to_json(&expr)?;
        assert!(json.contains(r#""operator": "Mul""#));
        let deserialized: Expr = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }

    #[test]
    fn test_ast_printer() {
        let printed = AstPrinter::new().print(&sample());
        assert_eq!(
            printed,
            "Mul\n  Add\n    Number 1\n    Number 2\n  Number 3\n"
        );
    }

    #[test]
    fn test_display_is_fully_parenthesised() {
        assert_eq!(sample().to_string(), "((1 + 2) * 3)");
        assert_eq!(Expr::number(7).to_string(), "7");
    }
}
