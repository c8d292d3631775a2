//! Visitor pattern implementation for traversing the AST.
//!
//! A `Visitor` supplies one method per node kind; [`Expr::accept`] dispatches
//! to the matching method. Visitors decide for themselves whether and in
//! which order to descend into the children of a binary node.

use crate::ast::{BinaryExpr, Expr};

/// The result type for visitor operations.
pub type VisitResult<V> = Result<<V as Visitor>::Output, <V as Visitor>::Error>;

/// A visitor over expression trees.
pub trait Visitor {
    /// The value produced for each visited node.
    type Output;
    /// The error that aborts the traversal.
    type Error;

    /// Visits an integer literal.
    fn visit_number(&mut self, value: i64) -> VisitResult<Self>;

    /// Visits a binary operation.
    fn visit_binary(&mut self, node: &BinaryExpr) -> VisitResult<Self>;
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V>;
}

impl Visitable for Expr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V> {
        match self {
            Expr::Number(value) => visitor.visit_number(*value),
            Expr::Binary(bin) => visitor.visit_binary(bin),
        }
    }
}

impl Visitable for BinaryExpr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V> {
        visitor.visit_binary(self)
    }
}
