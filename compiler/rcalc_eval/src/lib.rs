//! Evaluator for rcalc expression trees.

pub mod evaluator;

pub use evaluator::{EvalError, Evaluator};

use rcalc_ast::Expr;

/// Reduces an expression tree to its integer value.
pub fn evaluate(root: &Expr) -> Result<i64, EvalError> {
    let mut evaluator = Evaluator::new();
    let value = evaluator.eval(root)?;
    log::debug!(
        "evaluated {} operation(s) to {value}",
        evaluator.operations()
    );
    Ok(value)
}
