//! Feedback memoization
//!
//! Feedback between two fixed words is a pure function of their letters, so
//! entries never go stale; the table only grows, bounded by the product of
//! the pool sizes within a single run.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Memo table for feedback evaluations, keyed by (secret, guess).
///
/// Purely an optimization: with or without it, every result is identical to
/// calling [`Pattern::evaluate`] directly.
#[derive(Debug, Default)]
pub struct FeedbackCache {
    entries: FxHashMap<([u8; 5], [u8; 5]), Pattern>,
}

impl FeedbackCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback for `guess` against `secret`, computed on first use and
    /// served from the table afterwards.
    pub fn evaluate(&mut self, secret: &Word, guess: &Word) -> Pattern {
        *self
            .entries
            .entry((*secret.chars(), *guess.chars()))
            .or_insert_with(|| Pattern::evaluate(secret, guess))
    }

    /// Read-only probe, for scoring workers that share the cache without
    /// writing back.
    #[must_use]
    pub fn lookup(&self, secret: &Word, guess: &Word) -> Option<Pattern> {
        self.entries
            .get(&(*secret.chars(), *guess.chars()))
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn matches_direct_evaluation() {
        let mut cache = FeedbackCache::new();
        let secret = word("slate");
        let guess = word("crane");

        let cached = cache.evaluate(&secret, &guess);
        assert_eq!(cached, Pattern::evaluate(&secret, &guess));
    }

    #[test]
    fn stores_one_entry_per_pair() {
        let mut cache = FeedbackCache::new();
        let secret = word("slate");
        let guess = word("crane");

        cache.evaluate(&secret, &guess);
        cache.evaluate(&secret, &guess);
        cache.evaluate(&secret, &guess);
        assert_eq!(cache.len(), 1);

        // Feedback is guess-relative, so the swapped pair is a new entry
        cache.evaluate(&guess, &secret);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn lookup_only_hits_after_evaluate() {
        let mut cache = FeedbackCache::new();
        let secret = word("slate");
        let guess = word("crane");

        assert!(cache.lookup(&secret, &guess).is_none());
        let pattern = cache.evaluate(&secret, &guess);
        assert_eq!(cache.lookup(&secret, &guess), Some(pattern));
    }
}
