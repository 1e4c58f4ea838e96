//! First-turn ranking
//!
//! Prints the top suggestions for a fresh game. On a second run with the
//! same word lists the table comes straight from the persistent cache.

use crate::output::print_suggestions;
use crate::solver::{EntropySolver, GuessSpace};
use anyhow::Result;

/// Score and print the top-k opening guesses.
///
/// # Errors
/// Returns an error if the candidate pool is empty (unusable word lists).
pub fn run_rank(mut solver: EntropySolver, top_k: usize, space: GuessSpace) -> Result<()> {
    let pool_size = match space {
        GuessSpace::Allowed => solver.allowed().len(),
        GuessSpace::Candidates => solver.candidate_count(),
    };
    println!(
        "Scoring {pool_size} guesses against {} candidates...",
        solver.candidate_count()
    );

    let suggestions = solver.suggest(top_k, space, None)?;
    print_suggestions(&suggestions);
    println!();

    Ok(())
}
