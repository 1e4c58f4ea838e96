//! Interactive helper loop
//!
//! The game itself is played elsewhere. Each turn the user is shown ranked
//! suggestions, types the guess they actually played and the feedback it
//! earned, and the candidate pool narrows for the next round.

use crate::core::{Pattern, Word};
use crate::output::print_suggestions;
use crate::solver::{EntropySolver, GuessSpace};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

pub struct PlayConfig {
    pub top_k: usize,
    pub guess_space: GuessSpace,
    pub first_guess: Option<String>,
}

/// Run the interactive loop until the game is solved, the pool empties, or
/// the user quits.
///
/// # Errors
/// Returns an error on I/O failure or if the solver reports an invalid
/// forced guess (the binary validates it up front, so that is unexpected
/// here).
pub fn run_play(mut solver: EntropySolver, config: &PlayConfig) -> Result<()> {
    println!("\n{}", "=== Entropy Guess Advisor ===".bold());
    println!("Allowed guesses: {}", solver.allowed().len());
    println!("Possible answers: {}", solver.candidate_count());
    println!("Feedback input: 5 letters of [g,y,b] or digits [2,1,0]. Example: bygyb or 02120");
    println!("Type 'quit' to exit.\n");

    let mut turn = 1usize;

    loop {
        let remaining = solver.candidate_count();
        if remaining == 0 {
            println!(
                "{}",
                "No candidates left. Either the word list doesn't match the game's dictionary,"
                    .red()
            );
            println!("{}", "or a feedback pattern was mistyped.".red());
            break;
        }

        println!("Turn {turn} | Remaining candidates: {remaining}");
        if remaining <= 20 {
            let listing: Vec<&str> = solver.candidates().iter().map(Word::text).collect();
            println!("Candidates: {}", listing.join(" "));
        }

        let forced = if turn == 1 {
            config.first_guess.as_deref()
        } else {
            None
        };
        let suggestions = solver.suggest(config.top_k, config.guess_space, forced)?;
        print_suggestions(&suggestions);

        let Some((best, _)) = suggestions.first() else {
            println!("No suggestions to offer.");
            break;
        };
        let best = best.clone();
        println!("\nSuggested guess: {}\n", best.text().bright_white().bold());

        let (guess, pattern) = if remaining == 1 {
            println!(
                "There's only one word left, the answer is {}!\n",
                best.text().bright_white().bold()
            );
            (best, Pattern::PERFECT)
        } else {
            let input = prompt("Enter the guess you used (or press Enter to use suggested)")?;
            if input == "quit" {
                break;
            }
            let guess = if input.is_empty() {
                best
            } else {
                match Word::new(&input) {
                    Ok(word) => word,
                    Err(err) => {
                        println!("{err}\n");
                        continue;
                    }
                }
            };

            let pattern_input = prompt("Enter the feedback pattern (g/y/b or 2/1/0)")?;
            if pattern_input == "quit" {
                break;
            }
            let pattern = if pattern_input == "win" {
                Pattern::PERFECT
            } else {
                match Pattern::parse(&pattern_input) {
                    Ok(pattern) => pattern,
                    Err(err) => {
                        println!("{err}\n");
                        continue;
                    }
                }
            };

            (guess, pattern)
        };

        if pattern.is_perfect() {
            println!(
                "{}",
                format!("Solved in {turn} {}!", if turn == 1 { "turn" } else { "turns" })
                    .green()
                    .bold()
            );
            println!();
            break;
        }

        solver.filter(&guess, pattern);
        println!();
        turn += 1;
    }

    Ok(())
}

fn prompt(text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
