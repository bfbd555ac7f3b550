use std::fmt;

/// How the evaluator walks the split tree
///
/// All strategies produce identical result sets for the same tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvaluationStrategy {
    /// Plain recursion over every split
    #[default]
    Sequential,
    /// Split positions and their two sides fan out onto the rayon pool
    Parallel,
    /// Result sets are cached per token span for the duration of one call
    Memoized,
}

impl EvaluationStrategy {
    pub const ALL: [EvaluationStrategy; 3] = [
        EvaluationStrategy::Sequential,
        EvaluationStrategy::Parallel,
        EvaluationStrategy::Memoized,
    ];
}

impl fmt::Display for EvaluationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EvaluationStrategy::Sequential => "sequential",
            EvaluationStrategy::Parallel => "parallel",
            EvaluationStrategy::Memoized => "memoized",
        };
        write!(f, "{}", name)
    }
}
