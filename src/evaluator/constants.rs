// Tuning constants for the evaluator module

/// Token spans at or below this length are evaluated sequentially even under the
/// parallel strategy; their result sets are too small to pay for scheduling.
pub const PARALLEL_SPLIT_THRESHOLD: usize = 9;
