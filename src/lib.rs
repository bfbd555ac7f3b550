//! Groupings - enumerate every value a flat arithmetic expression can take
//!
//! An expression such as `2*3-4-5` is read without operator precedence. Instead,
//! every possible full parenthesization is evaluated and all the resulting values
//! are returned, in a fixed discovery order and with duplicates kept.

pub mod evaluator;
pub mod expression;
pub mod tokenizer;
pub mod utils;

// Re-export the main public API
pub use evaluator::{
    EvaluationError, EvaluationStrategy, GroupingError, GroupingEvaluator, ResultSet,
    apply_symbol,
};
pub use expression::Expression;
pub use tokenizer::{Operator, Token, Tokenizer, tokenize};
pub use utils::{UtilsError, format_result_set, validate_expression};

/// Evaluate `expression` under every grouping, without validating it first
///
/// # Errors
///
/// Returns an error if an operand is not a base-10 integer or an operator slot
/// holds anything but `+ - * /`. Division by zero is not an error: the groupings
/// that divide by zero are left out of the result.
///
/// # Examples
///
/// ```
/// use groupings::evaluate;
///
/// assert_eq!(evaluate("2*3-4-5"), Ok(vec![8.0, -12.0, 7.0, -7.0, -3.0]));
/// assert_eq!(evaluate("2/0"), Ok(vec![]));
/// ```
pub fn evaluate(expression: &str) -> Result<ResultSet, EvaluationError> {
    GroupingEvaluator::new().evaluate(expression)
}

/// Validate `expression` against the `digits (operator digits)*` grammar, then
/// evaluate it under every grouping
///
/// # Errors
///
/// This function will return an error if:
/// * The expression is empty
/// * The expression contains anything besides digit runs separated by single operators
///
/// # Examples
///
/// ```
/// use groupings::evaluate_validated;
///
/// assert!(evaluate_validated("22*3-4/2").is_ok());
/// assert!(evaluate_validated("(2)*3").is_err());
/// ```
pub fn evaluate_validated(expression: &str) -> Result<ResultSet, GroupingError> {
    validate_expression(expression)?;
    Ok(evaluate(expression)?)
}
