use crate::tokenizer::Operator;

/// One full grouping of a flat expression, as a binary tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Operand(f64),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(operator, Box::new(left), Box::new(right))
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Expression::Operand(_) => 0,
            Expression::Binary(_, l, r) => 1 + l.operator_count() + r.operator_count(),
        }
    }
}
