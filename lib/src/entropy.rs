use crate::results::FeedbackPattern;
use rayon::prelude::*;
use std::sync::Arc;

/// How informative one candidate guess is against a pool.
#[derive(Debug, Clone)]
pub struct GuessAnalysis {
    pub word: Arc<str>,
    /// Expected information gain in bits.
    pub entropy: f64,
    /// Whether the candidate is itself still a possible answer.
    pub in_pool: bool,
}

/// Computes the Shannon entropy, in bits, of the feedback-pattern
/// distribution that guessing `candidate` induces over `pool`.
///
/// The pool is partitioned into at most 243 buckets by the pattern each word
/// would produce; the entropy of the bucket frequencies measures how evenly
/// the guess is expected to split the remaining candidates. A single-word
/// pool yields 0 for every candidate. The empty pool is undefined and must be
/// guarded by the caller.
pub fn entropy(candidate: &str, pool: &[Arc<str>]) -> f64 {
    let mut counts = [0u32; FeedbackPattern::NUM_CODES];
    for word in pool {
        counts[FeedbackPattern::compute(candidate, word).code() as usize] += 1;
    }

    let total = pool.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Scores every word of `universe` against `pool`, in universe order.
///
/// The universe is deliberately wider than the pool: a word that can no
/// longer be the answer may still split the remaining candidates best. The
/// per-candidate computations are independent and run in parallel.
pub fn rank_guesses(universe: &[Arc<str>], pool: &[Arc<str>]) -> Vec<GuessAnalysis> {
    universe
        .par_iter()
        .map(|word| GuessAnalysis {
            word: Arc::clone(word),
            entropy: entropy(word, pool),
            in_pool: pool.iter().any(|candidate| candidate == word),
        })
        .collect()
}
