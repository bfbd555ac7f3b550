use crate::evaluator::EvaluationError;
use crate::expression::{Expression, enumerate_groupings};
use crate::tokenizer::{Operator, Token, tokenize};

#[test]
fn test_enumerate_single_operand() {
    let groupings = enumerate_groupings(&tokenize("5"));
    assert_eq!(groupings, Ok(vec![Expression::Operand(5.0)]));
}

#[test]
fn test_enumerate_empty() {
    assert_eq!(enumerate_groupings(&[]), Ok(Vec::new()));
}

#[test]
fn test_enumerate_order_and_rendering() {
    let groupings = enumerate_groupings(&tokenize("2*3-4-5"));
    assert!(groupings.is_ok());
    if let Ok(groupings) = groupings {
        let rendered: Vec<String> = groupings.iter().map(|g| g.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "2 * (3 - (4 - 5))",
                "2 * ((3 - 4) - 5)",
                "(2 * 3) - (4 - 5)",
                "(2 * (3 - 4)) - 5",
                "((2 * 3) - 4) - 5",
            ]
        );
    }
}

#[test]
fn test_enumerate_values_match_expected() {
    let groupings = enumerate_groupings(&tokenize("2*3-4-5"));
    assert!(groupings.is_ok());
    if let Ok(groupings) = groupings {
        let values: Vec<Option<f64>> = groupings.iter().map(Expression::evaluate).collect();
        assert_eq!(
            values,
            vec![Some(8.0), Some(-12.0), Some(7.0), Some(-7.0), Some(-3.0)]
        );
    }
}

#[test]
fn test_division_by_zero_grouping_is_kept() {
    // 1/(2-2) has no result, (1/2)-2 does
    let groupings = enumerate_groupings(&tokenize("1/2-2"));
    assert!(groupings.is_ok());
    if let Ok(groupings) = groupings {
        assert_eq!(groupings.len(), 2);
        let values: Vec<Option<f64>> = groupings.iter().map(Expression::evaluate).collect();
        assert_eq!(values, vec![None, Some(-1.5)]);
    }
}

#[test]
fn test_nested_division_by_zero_propagates() {
    let expr = Expression::binary(
        Operator::Add,
        Expression::Operand(1.0),
        Expression::binary(
            Operator::Divide,
            Expression::Operand(3.0),
            Expression::Operand(0.0),
        ),
    );
    assert_eq!(expr.evaluate(), None);
    assert_eq!(expr.to_string(), "1 + (3 / 0)");
}

#[test]
fn test_operator_count() {
    let groupings = enumerate_groupings(&tokenize("1+2+3+4"));
    assert!(groupings.is_ok());
    if let Ok(groupings) = groupings {
        assert_eq!(groupings.len(), 5);
        assert!(groupings.iter().all(|g| g.operator_count() == 3));
    }
    assert_eq!(Expression::Operand(1.0).operator_count(), 0);
}

#[test]
fn test_enumerate_invalid_operator() {
    let tokens = vec![Token::operand("2"), Token::operand("!"), Token::operand("3")];
    assert_eq!(
        enumerate_groupings(&tokens),
        Err(EvaluationError::InvalidOperator("!".to_string()))
    );
}

#[test]
fn test_enumerate_non_numeric_operand() {
    assert_eq!(
        enumerate_groupings(&tokenize("2*b")),
        Err(EvaluationError::NonNumericOperand("b".to_string()))
    );
}

#[test]
fn test_display_operand() {
    assert_eq!(Expression::Operand(22.0).to_string(), "22");
}
