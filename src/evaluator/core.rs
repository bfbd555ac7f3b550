use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::evaluator::constants::PARALLEL_SPLIT_THRESHOLD;
use crate::evaluator::errors::EvaluationError;
use crate::evaluator::split::{Split, splits};
use crate::evaluator::strategy::EvaluationStrategy;
use crate::expression::{Expression, enumerate_groupings};
use crate::tokenizer::{Operator, Token, tokenize};

/// Every value reachable by some grouping, in discovery order, duplicates kept
pub type ResultSet = Vec<f64>;

/// Result sets keyed by `(offset, length)` of a span within the top-level tokens
type SpanCache = HashMap<(usize, usize), Rc<ResultSet>>;

/// Evaluates a flat expression under every possible grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingEvaluator {
    strategy: EvaluationStrategy,
}

impl GroupingEvaluator {
    /// Create an evaluator using the sequential strategy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: EvaluationStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> EvaluationStrategy {
        self.strategy
    }

    /// Tokenize `expression` and evaluate every grouping of it.
    ///
    /// The expression is not validated first; see [`crate::evaluate_validated`].
    ///
    /// # Errors
    ///
    /// Returns an error if an operand is not a base-10 integer or an operator slot
    /// holds anything but `+ - * /`.
    pub fn evaluate(&self, expression: &str) -> Result<ResultSet, EvaluationError> {
        info!(
            "Evaluating all groupings of '{}' ({} strategy)",
            expression, self.strategy
        );

        let tokens = tokenize(expression);
        let results = self.evaluate_tokens(&tokens)?;

        info!("Found {} results", results.len());
        Ok(results)
    }

    /// # Errors
    ///
    /// Same as [`GroupingEvaluator::evaluate`].
    pub fn evaluate_tokens(&self, tokens: &[Token]) -> Result<ResultSet, EvaluationError> {
        match self.strategy {
            EvaluationStrategy::Sequential => evaluate_sequential(tokens),
            EvaluationStrategy::Parallel => evaluate_parallel(tokens),
            EvaluationStrategy::Memoized => {
                let mut cache = SpanCache::new();
                let results = evaluate_memoized(tokens, 0, &mut cache)?;
                debug!("Memoized {} token spans", cache.len());
                drop(cache);
                Ok(Rc::try_unwrap(results).unwrap_or_else(|shared| (*shared).clone()))
            }
        }
    }

    /// Every grouping of `expression` as a tree, including those that divide by zero
    ///
    /// # Errors
    ///
    /// Same as [`GroupingEvaluator::evaluate`].
    pub fn groupings(&self, expression: &str) -> Result<Vec<Expression>, EvaluationError> {
        self.groupings_for_tokens(&tokenize(expression))
    }

    /// # Errors
    ///
    /// Same as [`GroupingEvaluator::evaluate`].
    pub fn groupings_for_tokens(&self, tokens: &[Token]) -> Result<Vec<Expression>, EvaluationError> {
        let groupings = enumerate_groupings(tokens)?;
        debug!("Enumerated {} groupings", groupings.len());
        Ok(groupings)
    }
}

/// Spans of zero, one or three tokens need no splitting
fn evaluate_base(tokens: &[Token]) -> Option<Result<ResultSet, EvaluationError>> {
    match tokens {
        [] => Some(Ok(Vec::new())),
        [single] => Some(single.operand_value().map(|value| vec![value])),
        [left, operator, right] => Some(evaluate_single_operation(left, operator, right)),
        _ => None,
    }
}

fn evaluate_single_operation(
    left: &Token,
    operator: &Token,
    right: &Token,
) -> Result<ResultSet, EvaluationError> {
    let operator = operator.operator()?;
    let left = left.operand_value()?;
    let right = right.operand_value()?;
    Ok(operator.apply(left, right).into_iter().collect())
}

/// Append `l op r` for every pair, left results outer, skipping divisions by zero
fn combine_into(results: &mut ResultSet, operator: Operator, left: &[f64], right: &[f64]) {
    for &l in left {
        for &r in right {
            if let Some(value) = operator.apply(l, r) {
                results.push(value);
            }
        }
    }
}

fn evaluate_sequential(tokens: &[Token]) -> Result<ResultSet, EvaluationError> {
    if let Some(base) = evaluate_base(tokens) {
        return base;
    }

    trace!("Splitting span of {} tokens", tokens.len());
    let mut results = Vec::new();
    for split in splits(tokens) {
        let split = split?;
        let left = evaluate_sequential(split.left)?;
        let right = evaluate_sequential(split.right)?;
        combine_into(&mut results, split.operator, &left, &right);
    }
    Ok(results)
}

fn evaluate_parallel(tokens: &[Token]) -> Result<ResultSet, EvaluationError> {
    if tokens.len() <= PARALLEL_SPLIT_THRESHOLD {
        return evaluate_sequential(tokens);
    }

    let candidates: Vec<Split<'_>> = splits(tokens).collect::<Result<_, _>>()?;
    trace!(
        "Fanning out {} splits of a {}-token span",
        candidates.len(),
        tokens.len()
    );

    // collect keeps split order; reducing in that order restores the sequential
    // result ordering and makes the first failing split's error win
    let per_split: Vec<Result<ResultSet, EvaluationError>> = candidates
        .par_iter()
        .map(|split| {
            let (left, right) = rayon::join(
                || evaluate_parallel(split.left),
                || evaluate_parallel(split.right),
            );
            let (left, right) = (left?, right?);
            let mut combined = Vec::with_capacity(left.len().saturating_mul(right.len()));
            combine_into(&mut combined, split.operator, &left, &right);
            Ok(combined)
        })
        .collect();

    let mut results = Vec::new();
    for combined in per_split {
        results.extend(combined?);
    }
    Ok(results)
}

fn evaluate_memoized(
    tokens: &[Token],
    offset: usize,
    cache: &mut SpanCache,
) -> Result<Rc<ResultSet>, EvaluationError> {
    let key = (offset, tokens.len());
    if let Some(cached) = cache.get(&key) {
        trace!("Cache hit for span {:?}", key);
        return Ok(Rc::clone(cached));
    }

    let results = match evaluate_base(tokens) {
        Some(base) => base?,
        None => {
            let mut results = Vec::new();
            for split in splits(tokens) {
                let split = split?;
                let left = evaluate_memoized(split.left, offset, cache)?;
                let right = evaluate_memoized(split.right, offset + split.index + 1, cache)?;
                combine_into(&mut results, split.operator, &left, &right);
            }
            results
        }
    };

    let results = Rc::new(results);
    cache.insert(key, Rc::clone(&results));
    Ok(results)
}
