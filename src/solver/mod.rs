//! Entropy-maximizing solver
//!
//! The pieces, leaf-first: feedback memoization, entropy scoring, candidate
//! tracking, the persistent turn-1 table, and the engine that ties them
//! together.

pub mod candidates;
mod engine;
pub mod entropy;
pub mod feedback;
pub mod first_guess;

pub use candidates::Candidates;
pub use engine::{EntropySolver, GuessSpace};
pub use feedback::FeedbackCache;
pub use first_guess::{DEFAULT_CACHE_FILE, FirstGuessCache};
