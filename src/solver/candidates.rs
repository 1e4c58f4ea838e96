//! Candidate pool tracking

use crate::core::{Pattern, Word};
use crate::solver::feedback::FeedbackCache;

/// The set of secrets still consistent with every observed feedback.
///
/// Owned and exclusively mutated here; the pool only ever shrinks. An empty
/// pool is a valid terminal state meaning the observed feedback contradicts
/// the word lists.
#[derive(Debug, Clone)]
pub struct Candidates {
    words: Vec<Word>,
    initial: bool,
}

impl Candidates {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            initial: true,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True until the first [`filter`](Self::filter) call. Turn-1 scoring is
    /// deterministic for fixed pools, so it is only cacheable in this state.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        self.initial
    }

    /// Keep only candidates whose feedback against `guess` equals the
    /// observed pattern. Returns the remaining count.
    ///
    /// Monotonic (the pool never grows) and idempotent: repeating the same
    /// (guess, pattern) leaves the pool unchanged, since the survivors are
    /// exactly the words that already produce that pattern.
    pub fn filter(&mut self, guess: &Word, observed: Pattern, cache: &mut FeedbackCache) -> usize {
        self.initial = false;
        self.words
            .retain(|secret| cache.evaluate(secret, guess) == observed);
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn filter_keeps_consistent_candidates() {
        let mut candidates = Candidates::new(words(&["irate", "crate", "grate", "slate"]));
        let mut cache = FeedbackCache::new();

        let guess = Word::new("crane").unwrap();
        let secret = Word::new("irate").unwrap();
        let observed = Pattern::evaluate(&secret, &guess);

        candidates.filter(&guess, observed, &mut cache);

        // The real secret always survives its own feedback
        assert!(candidates.words().iter().any(|w| w.text() == "irate"));
    }

    #[test]
    fn filter_is_monotonic() {
        let mut candidates = Candidates::new(words(&["irate", "crate", "grate", "slate"]));
        let mut cache = FeedbackCache::new();
        let before = candidates.len();

        let guess = Word::new("crane").unwrap();
        let observed = Pattern::evaluate(&Word::new("grate").unwrap(), &guess);
        let after = candidates.filter(&guess, observed, &mut cache);

        assert!(after <= before);
    }

    #[test]
    fn filter_is_idempotent() {
        let mut candidates = Candidates::new(words(&["irate", "crate", "grate", "slate"]));
        let mut cache = FeedbackCache::new();

        let guess = Word::new("crane").unwrap();
        let observed = Pattern::evaluate(&Word::new("crate").unwrap(), &guess);

        let first = candidates.filter(&guess, observed, &mut cache);
        let survivors: Vec<String> = candidates
            .words()
            .iter()
            .map(|w| w.text().to_string())
            .collect();

        let second = candidates.filter(&guess, observed, &mut cache);
        let survivors_again: Vec<String> = candidates
            .words()
            .iter()
            .map(|w| w.text().to_string())
            .collect();

        assert_eq!(first, second);
        assert_eq!(survivors, survivors_again);
    }

    #[test]
    fn filter_can_empty_the_pool() {
        let mut candidates = Candidates::new(words(&["irate", "crate"]));
        let mut cache = FeedbackCache::new();

        // Claim all-match for a word that is no candidate
        let guess = Word::new("zzzzz").unwrap();
        let remaining = candidates.filter(&guess, Pattern::PERFECT, &mut cache);

        assert_eq!(remaining, 0);
        assert!(candidates.is_empty());
    }

    #[test]
    fn filter_clears_initial_flag() {
        let mut candidates = Candidates::new(words(&["irate", "crate"]));
        let mut cache = FeedbackCache::new();
        assert!(candidates.is_initial());

        let guess = Word::new("crane").unwrap();
        let observed = Pattern::evaluate(&Word::new("irate").unwrap(), &guess);
        candidates.filter(&guess, observed, &mut cache);

        assert!(!candidates.is_initial());
    }

    #[test]
    fn filter_preserves_pool_order() {
        let mut candidates = Candidates::new(words(&["slate", "irate", "crate", "grate"]));
        let mut cache = FeedbackCache::new();

        // "_rate" words all produce the same feedback for this guess
        let guess = Word::new("rated").unwrap();
        let observed = Pattern::evaluate(&Word::new("irate").unwrap(), &guess);
        candidates.filter(&guess, observed, &mut cache);

        let survivors: Vec<&str> = candidates.words().iter().map(Word::text).collect();
        assert_eq!(survivors, vec!["irate", "crate", "grate"]);
    }
}
