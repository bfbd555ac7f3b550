use log::{debug, warn};

use crate::evaluator::EvaluationError;

/// Parse an operand token strictly as a base-10 integer literal.
///
/// Leading zeros are accepted. Signs, exponents, decimal points and any other
/// non-digit character are rejected rather than parsed leniently.
///
/// # Errors
///
/// Returns `NonNumericOperand` if the text is empty or contains anything but ASCII digits.
pub fn parse_operand(text: &str) -> Result<f64, EvaluationError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        warn!("Rejecting non-numeric operand: '{}'", text);
        return Err(EvaluationError::NonNumericOperand(text.to_string()));
    }

    let value = text
        .parse::<f64>()
        .map_err(|_| EvaluationError::NonNumericOperand(text.to_string()))?;
    debug!("Parsed operand '{}' as {}", text, value);
    Ok(value)
}
