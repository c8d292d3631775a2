// Tree-walking evaluator for rcalc expressions.
// Children are reduced before their parent (post-order); the first failure
// aborts the walk.

use rcalc_ast::ast::*;
use rcalc_ast::visit::{VisitResult, Visitable, Visitor};

/// An error raised while reducing an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The exact result does not fit a signed 64-bit integer.
    #[error("integer overflow in {left} {operator} {right}")]
    Overflow {
        operator: BinaryOperator,
        left: i64,
        right: i64,
    },
}

#[derive(Debug, Default)]
pub struct Evaluator {
    operations: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of binary operations applied so far.
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Reduces `expr` to a single integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcalc_ast::ast::{BinaryOperator, Expr};
    /// use rcalc_eval::evaluator::Evaluator;
    ///
    /// let expr = Expr::binary(BinaryOperator::Sub, Expr::number(8), Expr::number(3));
    /// assert_eq!(Evaluator::new().eval(&expr), Ok(5));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> Result<i64, EvalError> {
        expr.accept(self)
    }
}

impl Visitor for Evaluator {
    type Output = i64;
    type Error = EvalError;

    fn visit_number(&mut self, value: i64) -> VisitResult<Self> {
        Ok(value)
    }

    fn visit_binary(&mut self, node: &BinaryExpr) -> VisitResult<Self> {
        let left = node.left.accept(self)?;
        let right = node.right.accept(self)?;
        self.operations += 1;
        let value = apply(node.operator, left, right)?;
        log::trace!("{left} {} {right} = {value}", node.operator);
        Ok(value)
    }
}

/// Applies one arithmetic operator with checked semantics.
///
/// Division truncates toward zero, so `-7 / 2 == -3`.
pub fn apply(operator: BinaryOperator, left: i64, right: i64) -> Result<i64, EvalError> {
    let result = match operator {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                log::debug!("division by zero: {left} / 0");
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right)
        }
    };
    result.ok_or(EvalError::Overflow {
        operator,
        left,
        right,
    })
}
