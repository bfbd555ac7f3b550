use log::{debug, trace};

use super::token::{Operator, Token};

/// Split an expression into alternating operand and operator tokens.
///
/// No validation happens here: every character that is not one of `+ - * /` is
/// folded into the pending operand, so invalid input tokenizes into operands that
/// fail later when parsed.
pub fn tokenize(expression: &str) -> Vec<Token> {
    debug!("Tokenizing expression: '{}'", expression);

    let mut tokens = Vec::new();
    let mut pending = String::new();

    for character in expression.chars() {
        match Operator::from_symbol(character) {
            Some(op) => {
                if !pending.is_empty() {
                    tokens.push(Token::Operand(std::mem::take(&mut pending)));
                }
                tokens.push(Token::Operator(op));
            }
            None => pending.push(character),
        }
    }

    if !pending.is_empty() {
        tokens.push(Token::Operand(pending));
    }

    trace!("Produced {} tokens", tokens.len());
    tokens
}

/// Reusable tokenizer holding the expression it currently targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    expression: String,
}

impl Tokenizer {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// Re-target this tokenizer at a new expression, keeping its buffer
    pub fn set_expression(&mut self, expression: &str) -> &mut Self {
        self.expression.clear();
        self.expression.push_str(expression);
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn tokenize(&self) -> Vec<Token> {
        tokenize(&self.expression)
    }
}
