//! Shannon entropy scoring
//!
//! A guess partitions the candidate pool into buckets by the feedback
//! pattern each candidate would produce. The entropy of that bucket-size
//! distribution is the expected information gain, in bits, of playing the
//! guess against a secret drawn uniformly from the pool.

use crate::core::{Pattern, Word};
use crate::solver::feedback::FeedbackCache;
use rustc_hash::FxHashMap;

/// Shannon entropy in bits from bucket counts.
///
/// `H = -Σ (count/total)·log2(count/total)` over non-empty buckets. A total
/// of zero scores 0.0: there is no information to gain from an empty
/// universe.
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::entropy_from_counts;
///
/// // Four candidates split {1, 1, 2}: 0.25·2 + 0.25·2 + 0.5·1 = 1.5 bits
/// let bits = entropy_from_counts([1, 1, 2], 4);
/// assert!((bits - 1.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn entropy_from_counts(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of `guess` against the candidate pool.
///
/// Bucket membership comes from the shared feedback cache when the pair has
/// been seen before, and is computed directly otherwise; misses are not
/// written back, which keeps this safe to call from parallel workers that
/// only hold a shared reference.
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word], cache: &FeedbackCache) -> f64 {
    let mut buckets: FxHashMap<Pattern, usize> = FxHashMap::default();

    for secret in candidates {
        let pattern = cache
            .lookup(secret, guess)
            .unwrap_or_else(|| Pattern::evaluate(secret, guess));
        *buckets.entry(pattern).or_insert(0) += 1;
    }

    entropy_from_counts(buckets.into_values(), candidates.len())
}
