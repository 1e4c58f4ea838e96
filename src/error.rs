//! Solver error kinds

use thiserror::Error;

/// Errors surfaced by the solver.
///
/// Faults on the persistent first-turn cache are deliberately absent: that
/// cache is an optimization, and every read or write fault on it is handled
/// in place as a cache miss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Malformed word or feedback pattern text.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Forced guess that is not a member of the allowed guess list.
    #[error("forced guess {0:?} is not in the allowed guess list")]
    InvalidGuess(String),

    /// Filtering has eliminated every candidate. The feedback observed so
    /// far is inconsistent with the word lists, either because a pattern was
    /// mistyped or because the lists don't match the game's dictionary.
    #[error("no candidates remain; a pattern was mistyped or the word list does not match the game")]
    EmptyCandidateSet,
}
