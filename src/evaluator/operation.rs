use log::{debug, trace};

use crate::evaluator::errors::EvaluationError;
use crate::tokenizer::Operator;

/// Exact comparison; `-0.0` counts as zero as well
#[inline]
fn is_zero(value: f64) -> bool {
    value == 0.0
}

impl Operator {
    /// Apply this operator to a pair of operands.
    ///
    /// Division is true division. Returns `None` when dividing by zero: that
    /// grouping has no result, which is not an error.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        let result = match self {
            Operator::Add => Some(left + right),
            Operator::Subtract => Some(left - right),
            Operator::Multiply => Some(left * right),
            Operator::Divide => {
                if is_zero(right) {
                    debug!("Division by zero: {} / {}", left, right);
                    None
                } else {
                    Some(left / right)
                }
            }
        };

        trace!("{} {} {} -> {:?}", left, self, right, result);
        result
    }
}

/// Apply an operator given by its raw symbol.
///
/// # Errors
///
/// Returns `InvalidOperator` if the symbol is not exactly one of `+ - * /`.
pub fn apply_symbol(left: f64, symbol: &str, right: f64) -> Result<Option<f64>, EvaluationError> {
    let operator: Operator = symbol.parse()?;
    Ok(operator.apply(left, right))
}
