use log::debug;

use crate::expression::ast::Expression;

impl Expression {
    /// Evaluate this grouping, or `None` if any node in it divides by zero
    pub fn evaluate(&self) -> Option<f64> {
        match self {
            Expression::Operand(value) => Some(*value),
            Expression::Binary(operator, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                let result = operator.apply(left, right);
                if result.is_none() {
                    debug!("Grouping has no result: {}", self);
                }
                result
            }
        }
    }
}
