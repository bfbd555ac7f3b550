//! Property-based tests for grouping evaluation.

use groupings::utils::catalan;
use groupings::{EvaluationStrategy, GroupingEvaluator, Operator, evaluate, validate_expression};
use proptest::{prelude::*, test_runner::Config};

const MAX_OPERAND: u32 = 100;
const MAX_OPERATORS: usize = 6;

fn operator_strategy(symbols: &'static [char]) -> impl Strategy<Value = char> {
    prop::sample::select(symbols)
}

prop_compose! {
    fn generate_expression(symbols: &'static [char])(
        first in 0..MAX_OPERAND,
        rest in prop::collection::vec(
            (operator_strategy(symbols), 0..MAX_OPERAND),
            0..=MAX_OPERATORS,
        ),
    ) -> (String, usize) {
        let mut expression = first.to_string();
        for (symbol, operand) in &rest {
            expression.push(*symbol);
            expression.push_str(&operand.to_string());
        }
        (expression, rest.len())
    }
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn prop_single_operand_yields_itself(n in 0u64..1_000_000_000) {
        prop_assert_eq!(evaluate(&n.to_string()), Ok(vec![n as f64]));
    }

    #[test]
    fn prop_single_operation(
        a in 0..MAX_OPERAND,
        symbol in operator_strategy(&['+', '-', '*', '/']),
        b in 0..MAX_OPERAND,
    ) {
        let expression = format!("{}{}{}", a, symbol, b);
        let expected: Vec<f64> = Operator::from_symbol(symbol)
            .and_then(|op| op.apply(f64::from(a), f64::from(b)))
            .into_iter()
            .collect();
        if symbol == '/' && b == 0 {
            prop_assert!(expected.is_empty());
        }
        prop_assert_eq!(evaluate(&expression), Ok(expected));
    }

    #[test]
    fn prop_generated_expressions_are_valid(
        (expression, _) in generate_expression(&['+', '-', '*', '/'])
    ) {
        prop_assert!(validate_expression(&expression).is_ok());
    }

    #[test]
    fn prop_count_is_catalan_without_division(
        (expression, operators) in generate_expression(&['+', '-', '*'])
    ) {
        let results = evaluate(&expression);
        prop_assert!(results.is_ok());
        if let (Ok(results), Some(expected)) = (results, catalan(operators)) {
            prop_assert_eq!(results.len() as u128, expected);
        }
    }

    #[test]
    fn prop_results_are_surviving_groupings(
        (expression, operators) in generate_expression(&['+', '-', '*', '/'])
    ) {
        let evaluator = GroupingEvaluator::new();
        let results = evaluator.evaluate(&expression);
        let groupings = evaluator.groupings(&expression);
        prop_assert!(results.is_ok());
        prop_assert!(groupings.is_ok());
        if let (Ok(results), Ok(groupings)) = (results, groupings) {
            prop_assert_eq!(Some(groupings.len() as u128), catalan(operators));
            let surviving: Vec<f64> = groupings.iter().filter_map(|g| g.evaluate()).collect();
            prop_assert_eq!(results, surviving);
        }
    }

    #[test]
    fn prop_strategies_agree_and_are_deterministic(
        (expression, _) in generate_expression(&['+', '-', '*', '/'])
    ) {
        let baseline = evaluate(&expression);
        prop_assert!(baseline.is_ok());
        for strategy in EvaluationStrategy::ALL {
            let evaluator = GroupingEvaluator::with_strategy(strategy);
            prop_assert_eq!(&evaluator.evaluate(&expression), &baseline);
            prop_assert_eq!(&evaluator.evaluate(&expression), &baseline);
        }
    }
}
