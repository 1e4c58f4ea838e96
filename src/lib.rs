//! Entropy Guess Advisor
//!
//! Suggests guesses for five-letter word games by maximizing expected
//! information gain (Shannon entropy) over the feedback distribution, then
//! narrows the candidate pool turn by turn from observed feedback. The game
//! is played anywhere; this crate does the math.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{EntropySolver, GuessSpace};
//!
//! let allowed = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("crate").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//! let mut solver = EntropySolver::new(allowed, None);
//!
//! let ranked = solver.suggest(3, GuessSpace::Allowed, None).unwrap();
//! let (guess, _bits) = ranked[0].clone();
//!
//! // Feedback observed from the game narrows the pool for the next round
//! let observed = Pattern::parse("ggbbg").unwrap();
//! solver.filter(&guess, observed);
//! ```

// Core domain types
pub mod core;

// Error kinds
mod error;

// The entropy-maximizing solver
pub mod solver;

// Word list loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
