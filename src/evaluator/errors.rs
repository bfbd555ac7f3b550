use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that make an evaluation call fail outright
///
/// Division by zero is deliberately absent: it removes a single grouping from the
/// result set instead of failing the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Operand is not a base-10 integer: {0}")]
    NonNumericOperand(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),
    #[error("Validation error: {0}")]
    UtilsError(#[from] UtilsError),
}
