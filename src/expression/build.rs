use log::trace;

use crate::evaluator::{EvaluationError, splits};
use crate::expression::ast::Expression;
use crate::tokenizer::Token;

/// Build every grouping tree of `tokens` in discovery order: leftmost split first,
/// then left trees as the outer loop and right trees as the inner loop.
///
/// Trees that divide by zero are kept; [`Expression::evaluate`] tells them apart.
///
/// # Errors
///
/// Returns an error if an operand is not a base-10 integer or an operator slot
/// holds anything but `+ - * /`.
pub fn enumerate_groupings(tokens: &[Token]) -> Result<Vec<Expression>, EvaluationError> {
    match tokens {
        [] => Ok(Vec::new()),
        [single] => Ok(vec![Expression::Operand(single.operand_value()?)]),
        _ => {
            let mut groupings = Vec::new();
            for split in splits(tokens) {
                let split = split?;
                let lefts = enumerate_groupings(split.left)?;
                let rights = enumerate_groupings(split.right)?;
                trace!(
                    "Split at {} ({}): {} x {} groupings",
                    split.index,
                    split.operator,
                    lefts.len(),
                    rights.len()
                );
                for left in &lefts {
                    for right in &rights {
                        groupings.push(Expression::binary(
                            split.operator,
                            left.clone(),
                            right.clone(),
                        ));
                    }
                }
            }
            Ok(groupings)
        }
    }
}
