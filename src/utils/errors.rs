use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expression cannot be empty")]
    EmptyExpression,
    #[error("Invalid expression {0}")]
    InvalidExpression(String),
    #[error("Expression grammar failed to compile: {0}")]
    InvalidPattern(String),
}
