use std::fmt;
use std::str::FromStr;

use crate::evaluator::EvaluationError;
use crate::utils::parse_operand;

/// The four binary operators an expression may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Classify a single character, returning `None` for anything but `+ - * /`
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::from_symbol(symbol)
                .ok_or_else(|| EvaluationError::InvalidOperator(s.to_string())),
            _ => Err(EvaluationError::InvalidOperator(s.to_string())),
        }
    }
}

/// A single unit of a tokenized expression
///
/// Operands keep their raw text; they are parsed strictly only when the evaluator
/// needs their value, so a malformed operand surfaces as an error instead of a
/// fabricated number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Operand(String),
    Operator(Operator),
}

impl Token {
    pub fn operand(text: impl Into<String>) -> Self {
        Token::Operand(text.into())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// # Errors
    ///
    /// Returns `NonNumericOperand` if this token is an operator, or if its text is
    /// not a non-empty run of ASCII digits.
    pub fn operand_value(&self) -> Result<f64, EvaluationError> {
        match self {
            Token::Operand(text) => parse_operand(text),
            Token::Operator(op) => Err(EvaluationError::NonNumericOperand(op.to_string())),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidOperator` if an operand token sits where an operator belongs.
    pub fn operator(&self) -> Result<Operator, EvaluationError> {
        match self {
            Token::Operator(op) => Ok(*op),
            Token::Operand(text) => Err(EvaluationError::InvalidOperator(text.clone())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}
