//! Evaluator module: every value reachable by grouping a flat expression

pub mod constants;
mod core;
mod errors;
mod operation;
mod split;
mod strategy;

pub use self::core::{GroupingEvaluator, ResultSet};
pub use errors::{EvaluationError, GroupingError};
pub use operation::apply_symbol;
pub(crate) use split::splits;
pub use strategy::EvaluationStrategy;
