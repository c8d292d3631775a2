use rcalc_lexer::Symbol;

use super::ast::BinaryOperator;

impl TryFrom<Symbol> for BinaryOperator {
    type Error = Symbol;

    /// Parentheses are symbols but not operators; they are handed back.
    fn try_from(symbol: Symbol) -> Result<Self, Self::Error> {
        match symbol {
            Symbol::Plus => Ok(BinaryOperator::Add),
            Symbol::Minus => Ok(BinaryOperator::Sub),
            Symbol::Star => Ok(BinaryOperator::Mul),
            Symbol::Slash => Ok(BinaryOperator::Div),
            Symbol::LeftParen | Symbol::RightParen => Err(symbol),
        }
    }
}

impl From<BinaryOperator> for Symbol {
    fn from(operator: BinaryOperator) -> Self {
        match operator {
            BinaryOperator::Add => Symbol::Plus,
            BinaryOperator::Sub => Symbol::Minus,
            BinaryOperator::Mul => Symbol::Star,
            BinaryOperator::Div => Symbol::Slash,
        }
    }
}
