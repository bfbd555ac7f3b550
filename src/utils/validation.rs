use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::errors::UtilsError;

/// One or more digits, then any number of (operator, digits) pairs
static EXPRESSION_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^(\d+)([-+*/](\d+))*$"));

fn expression_pattern() -> Result<&'static Regex, UtilsError> {
    match &*EXPRESSION_RE {
        Ok(re) => Ok(re),
        Err(e) => Err(UtilsError::InvalidPattern(e.to_string())),
    }
}

/// # Errors
///
/// Returns an error if the expression is empty or does not match the flat
/// `operand (operator operand)*` grammar.
pub fn validate_expression(expression: &str) -> Result<(), UtilsError> {
    debug!("Validating expression: '{}'", expression);

    if expression.is_empty() {
        warn!("Expression is empty");
        return Err(UtilsError::EmptyExpression);
    }

    if !expression_pattern()?.is_match(expression) {
        warn!("Expression does not match the grammar: '{}'", expression);
        return Err(UtilsError::InvalidExpression(expression.to_string()));
    }

    debug!("Expression validation successful");
    Ok(())
}

pub fn is_valid_expression(expression: &str) -> bool {
    validate_expression(expression).is_ok()
}
