//! Suggestion engine
//!
//! Owns the word pools and caches and turns them into ranked guess lists.
//! The caller loop is: ask for suggestions, play a guess somewhere, observe
//! feedback, [`filter`](EntropySolver::filter), repeat.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::candidates::Candidates;
use crate::solver::entropy::score_guess;
use crate::solver::feedback::FeedbackCache;
use crate::solver::first_guess::FirstGuessCache;
use log::info;
use rayon::prelude::*;

/// Which pool a scoring pass ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSpace {
    /// Score every legal guess.
    Allowed,
    /// Score only the remaining candidates. Much cheaper, but gives up
    /// guesses that are legal plays without being possible answers.
    Candidates,
}

impl GuessSpace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Candidates => "candidates",
        }
    }

    /// Parse a mode name as given on a command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "allowed" => Some(Self::Allowed),
            "candidates" => Some(Self::Candidates),
            _ => None,
        }
    }
}

/// With this few candidates left, scoring is moot: just play them.
/// Tunable; 2 matches the behavior this tool has always had.
const SKIP_SCORING_THRESHOLD: usize = 2;

/// Entropy-maximizing guess advisor.
///
/// Construct once per game with the full word lists; both caches are owned
/// here rather than living in global state, so tests and simulations can
/// run isolated instances side by side.
pub struct EntropySolver {
    allowed: Vec<Word>,
    candidates: Candidates,
    feedback: FeedbackCache,
    first_turn: Option<FirstGuessCache>,
    logged_forced: Option<String>,
}

impl EntropySolver {
    /// Create a solver from the allowed guess list and, optionally, a
    /// separate answer list. Without one, every allowed guess is a
    /// candidate.
    #[must_use]
    pub fn new(allowed: Vec<Word>, answers: Option<Vec<Word>>) -> Self {
        let pool = answers.unwrap_or_else(|| allowed.clone());
        Self {
            allowed,
            candidates: Candidates::new(pool),
            feedback: FeedbackCache::new(),
            first_turn: None,
            logged_forced: None,
        }
    }

    /// Attach a persistent store for turn-1 scoring tables.
    #[must_use]
    pub fn with_first_turn_cache(mut self, cache: FirstGuessCache) -> Self {
        self.first_turn = Some(cache);
        self
    }

    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.candidates.words()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Feedback for (secret, guess), memoized for the lifetime of the run.
    pub fn feedback(&mut self, secret: &Word, guess: &Word) -> Pattern {
        self.feedback.evaluate(secret, guess)
    }

    /// Narrow the candidate pool to words consistent with the observed
    /// feedback for `guess`. Returns the remaining count; zero means the
    /// feedback contradicts the word lists, which the caller should surface.
    pub fn filter(&mut self, guess: &Word, observed: Pattern) -> usize {
        self.candidates.filter(guess, observed, &mut self.feedback)
    }

    /// Expected information gain of one guess against the current pool.
    #[must_use]
    pub fn score_guess(&self, guess: &Word) -> f64 {
        score_guess(guess, self.candidates.words(), &self.feedback)
    }

    /// Ranked list of at most `top_k` suggestions for the current state.
    ///
    /// Policy, in order:
    /// 1. Two or fewer candidates: return them with 0.0 bits, no scoring.
    /// 2. A forced guess bypasses ranking. It is normalized (trim,
    ///    lowercase) and must be in the allowed list; it does not need to
    ///    be a possible answer.
    /// 3. In the pre-feedback initial state, a persistent-cache hit skips
    ///    the scoring pass entirely.
    /// 4. Otherwise score the selected pool, sort by descending bits (ties
    ///    keep pool order), persist the full table if this was the initial
    ///    state, and return the top slice.
    ///
    /// # Errors
    /// - [`SolverError::EmptyCandidateSet`] if filtering has eliminated
    ///   every candidate; this is reported as an error precisely so callers
    ///   can tell it apart from a legitimately short suggestion list.
    /// - [`SolverError::InvalidGuess`] if a forced guess is not in the
    ///   allowed list.
    pub fn suggest(
        &mut self,
        top_k: usize,
        space: GuessSpace,
        forced_first: Option<&str>,
    ) -> Result<Vec<(Word, f64)>, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        if self.candidates.len() <= SKIP_SCORING_THRESHOLD {
            let mut suggestions: Vec<(Word, f64)> = self
                .candidates
                .words()
                .iter()
                .map(|word| (word.clone(), 0.0))
                .collect();
            suggestions.truncate(top_k);
            return Ok(suggestions);
        }

        if let Some(forced) = forced_first {
            let normalized = forced.trim().to_lowercase();
            let Some(word) = self.allowed.iter().find(|w| w.text() == normalized) else {
                return Err(SolverError::InvalidGuess(forced.to_string()));
            };
            let word = word.clone();
            let bits = self.score_guess(&word);
            if self.logged_forced.as_deref() != Some(normalized.as_str()) {
                info!("forced first guess {normalized:?} has expected entropy {bits:.4} bits");
                self.logged_forced = Some(normalized);
            }
            return Ok(vec![(word, bits)]);
        }

        let initial = self.candidates.is_initial();

        if initial
            && let Some(cache) = &self.first_turn
            && let Some(mut cached) = cache.load(&self.cache_key(space))
        {
            cached.truncate(top_k);
            return Ok(cached);
        }

        let pool: &[Word] = match space {
            GuessSpace::Allowed => &self.allowed,
            GuessSpace::Candidates => self.candidates.words(),
        };

        // Fan out over the pool; each worker reads the shared candidate
        // slice and cache view only. Collect preserves pool order, and the
        // sort is stable, so equal scores keep that order.
        let mut scored: Vec<(Word, f64)> = pool
            .par_iter()
            .map(|guess| {
                (
                    guess.clone(),
                    score_guess(guess, self.candidates.words(), &self.feedback),
                )
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        if initial && let Some(cache) = &self.first_turn {
            cache.store(&self.cache_key(space), &scored);
        }

        scored.truncate(top_k);
        Ok(scored)
    }

    fn cache_key(&self, space: GuessSpace) -> String {
        let pool: &[Word] = match space {
            GuessSpace::Allowed => &self.allowed,
            GuessSpace::Candidates => self.candidates.words(),
        };
        FirstGuessCache::cache_key(pool, self.candidates.words(), space)
    }
}
