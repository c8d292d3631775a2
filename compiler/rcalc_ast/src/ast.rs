// Abstract Syntax Tree definitions for rcalc expressions.
// Each binary node owns its two children; trees are built bottom-up by the
// parser and never mutated afterwards.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Number(i64),
    Binary(Box<BinaryExpr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpr {
    pub left: Expr,
    pub operator: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(Box::new(BinaryExpr {
            left,
            operator,
            right,
        }))
    }

    /// Number of binary levels above the deepest leaf; a bare number is 0.
    ///
    /// Recurses once per level, so only call it on trees whose depth is
    /// already bounded (the parser guarantees this for everything it builds).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) => 0,
            Expr::Binary(bin) => 1 + bin.left.depth().max(bin.right.depth()),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Renders the expression fully parenthesised, e.g. `((8 - 3) - 2)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Binary(bin) => write!(f, "({} {} {})", bin.left, bin.operator, bin.right),
        }
    }
}
