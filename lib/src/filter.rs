use crate::data::WordBank;
use crate::results::{FeedbackPattern, GuessStep};
use std::sync::Arc;

/// Returns the subset of `pool` consistent with seeing `pattern` after
/// playing `guess`.
///
/// A word stays exactly when it would have produced the observed pattern as
/// the answer. The input pool is untouched and its order is preserved, so
/// repeating the same guess/pattern pair is a no-op on an already-filtered
/// pool. An empty result is not an error here; it only becomes one once a
/// caller asks for a next guess.
pub fn filter_words(pool: &[Arc<str>], guess: &str, pattern: FeedbackPattern) -> Vec<Arc<str>> {
    pool.iter()
        .filter(|word| FeedbackPattern::compute(guess, word) == pattern)
        .map(Arc::clone)
        .collect()
}

/// Applies every step in play order, starting from the full bank.
pub fn filter_accumulative(steps: &[GuessStep], bank: &WordBank) -> Vec<Arc<str>> {
    steps.iter().fold(bank.to_vec(), |pool, step| {
        filter_words(&pool, &step.guess, step.pattern)
    })
}
