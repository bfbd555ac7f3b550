use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // nested operations are always parenthesized; only the root goes bare
        fn write_child(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Operand(value) => write!(f, "{}", value),
                Expression::Binary(..) => write!(f, "({})", expr),
            }
        }

        match self {
            Expression::Operand(value) => write!(f, "{}", value),
            Expression::Binary(operator, l, r) => {
                write_child(f, l)?;
                write!(f, " {} ", operator)?;
                write_child(f, r)
            }
        }
    }
}
