use crate::evaluator::errors::EvaluationError;
use crate::tokenizer::{Operator, Token};

/// One way of choosing the root operator of a token span
#[derive(Debug, Clone, Copy)]
pub(crate) struct Split<'a> {
    /// Index of the operator token within the span
    pub index: usize,
    pub operator: Operator,
    pub left: &'a [Token],
    pub right: &'a [Token],
}

/// Every split of `tokens` at an odd index, leftmost first.
///
/// The operator token is resolved before the split is yielded, so a corrupted
/// operator fails even when one side of it is empty.
pub(crate) fn splits(tokens: &[Token]) -> impl Iterator<Item = Result<Split<'_>, EvaluationError>> {
    (1..tokens.len()).step_by(2).filter_map(move |index| {
        let (left, rest) = tokens.split_at_checked(index)?;
        let (operator_token, right) = rest.split_first()?;
        Some(operator_token.operator().map(|operator| Split {
            index,
            operator,
            left,
            right,
        }))
    })
}
