//! Batch simulation
//!
//! Plays full games with the solver against a list of secrets and
//! aggregates the outcomes. The feedback normally typed in by a human is
//! produced directly from each secret, so this doubles as an end-to-end
//! exercise of the whole suggestion loop.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::{EntropySolver, FirstGuessCache, GuessSpace};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Outcome of a single simulated game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub secret: String,
    pub solved: bool,
    pub turns: usize,
    pub final_candidates: usize,
    pub first_guess: Option<String>,
}

/// Aggregate statistics over a batch of games
#[derive(Debug)]
pub struct SimulationStats {
    pub games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Average turns across solved games
    pub average_turns: f64,
    /// Median turns across solved games
    pub median_turns: f64,
    /// Turns → number of solved games that took that many
    pub turn_distribution: HashMap<usize, usize>,
    pub most_common_first_guess: Option<(String, usize)>,
    /// Secrets of failed games, capped at 10
    pub failed_examples: Vec<String>,
}

/// Shared setup for a batch of games
pub struct SimulateConfig<'a> {
    pub allowed: &'a [Word],
    pub answers: Option<&'a [Word]>,
    pub guess_space: GuessSpace,
    pub max_turns: usize,
    pub first_guess: Option<&'a str>,
    pub first_turn_cache: Option<&'a FirstGuessCache>,
}

/// Play one full game against `secret` with a fresh solver.
///
/// The persistent first-turn cache, when configured, is shared across
/// games, so every game after the first skips the turn-1 scoring pass.
///
/// # Errors
/// Returns [`SolverError::InvalidGuess`] if the configured forced first
/// guess is not in the allowed list; callers are expected to validate it
/// once up front instead of per game.
pub fn simulate_game(secret: &Word, config: &SimulateConfig) -> Result<GameResult, SolverError> {
    let mut solver = EntropySolver::new(
        config.allowed.to_vec(),
        config.answers.map(<[Word]>::to_vec),
    );
    if let Some(cache) = config.first_turn_cache {
        solver = solver.with_first_turn_cache(cache.clone());
    }

    let mut first_guess = None;

    for turn in 1..=config.max_turns {
        let forced = if turn == 1 { config.first_guess } else { None };
        let suggestions = match solver.suggest(1, config.guess_space, forced) {
            Ok(suggestions) => suggestions,
            Err(SolverError::EmptyCandidateSet) => {
                return Ok(GameResult {
                    secret: secret.text().to_string(),
                    solved: false,
                    turns: turn,
                    final_candidates: 0,
                    first_guess,
                });
            }
            Err(err) => return Err(err),
        };

        let Some((guess, _)) = suggestions.into_iter().next() else {
            return Ok(GameResult {
                secret: secret.text().to_string(),
                solved: false,
                turns: turn,
                final_candidates: solver.candidate_count(),
                first_guess,
            });
        };

        if first_guess.is_none() {
            first_guess = Some(guess.text().to_string());
        }

        let pattern = Pattern::evaluate(secret, &guess);
        if pattern.is_perfect() {
            return Ok(GameResult {
                secret: secret.text().to_string(),
                solved: true,
                turns: turn,
                final_candidates: solver.candidate_count(),
                first_guess,
            });
        }

        if solver.filter(&guess, pattern) == 0 {
            return Ok(GameResult {
                secret: secret.text().to_string(),
                solved: false,
                turns: turn,
                final_candidates: 0,
                first_guess,
            });
        }
    }

    Ok(GameResult {
        secret: secret.text().to_string(),
        solved: false,
        turns: config.max_turns,
        final_candidates: solver.candidate_count(),
        first_guess,
    })
}

/// Run a batch of games, one per secret.
///
/// # Errors
/// Propagates the first [`SolverError`] hit by a game; see
/// [`simulate_game`].
pub fn run_simulation(
    secrets: &[Word],
    config: &SimulateConfig,
    show_progress: bool,
) -> Result<Vec<GameResult>, SolverError> {
    let progress = if show_progress {
        let bar = ProgressBar::new(secrets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        Some(bar)
    } else {
        None
    };

    let mut results = Vec::with_capacity(secrets.len());
    for secret in secrets {
        let result = simulate_game(secret, config)?;
        if let Some(bar) = &progress {
            bar.set_message(format!(
                "{} in {} {}",
                result.secret,
                result.turns,
                if result.solved { "turns" } else { "turns (failed)" }
            ));
            bar.inc(1);
        }
        results.push(result);
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    Ok(results)
}

/// Fold game results into summary statistics
#[must_use]
pub fn summarize(results: &[GameResult]) -> SimulationStats {
    let games = results.len();
    let solved_games: Vec<&GameResult> = results.iter().filter(|r| r.solved).collect();
    let solved = solved_games.len();
    let failed = games - solved;

    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();
    for result in &solved_games {
        *turn_distribution.entry(result.turns).or_insert(0) += 1;
    }

    let mut solved_turns: Vec<usize> = solved_games.iter().map(|r| r.turns).collect();
    solved_turns.sort_unstable();

    let average_turns = if solved == 0 {
        0.0
    } else {
        solved_turns.iter().sum::<usize>() as f64 / solved as f64
    };

    let mut first_guess_counts: HashMap<String, usize> = HashMap::new();
    for result in results {
        if let Some(guess) = &result.first_guess {
            *first_guess_counts.entry(guess.clone()).or_insert(0) += 1;
        }
    }
    let most_common_first_guess = first_guess_counts
        .into_iter()
        .max_by(|(word_a, count_a), (word_b, count_b)| {
            count_a.cmp(count_b).then_with(|| word_b.cmp(word_a))
        });

    let failed_examples = results
        .iter()
        .filter(|r| !r.solved)
        .take(10)
        .map(|r| r.secret.clone())
        .collect();

    SimulationStats {
        games,
        solved,
        failed,
        average_turns,
        median_turns: median(&solved_turns),
        turn_distribution,
        most_common_first_guess,
        failed_examples,
    }
}

fn median(sorted: &[usize]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn config<'a>(allowed: &'a [Word], answers: Option<&'a [Word]>) -> SimulateConfig<'a> {
        SimulateConfig {
            allowed,
            answers,
            guess_space: GuessSpace::Candidates,
            max_turns: 6,
            first_guess: None,
            first_turn_cache: None,
        }
    }

    #[test]
    fn solves_a_small_game() {
        let allowed = words(&["crane", "slate", "irate", "crate", "grate"]);
        let answers = words(&["irate", "crate", "grate"]);
        let secret = Word::new("grate").unwrap();

        let result = simulate_game(&secret, &config(&allowed, Some(&answers))).unwrap();

        assert!(result.solved);
        assert!(result.turns <= answers.len());
        assert!(result.first_guess.is_some());
    }

    #[test]
    fn every_answer_is_solvable_in_a_tiny_pool() {
        let allowed = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let answers = words(&["irate", "crate", "grate", "trace"]);
        let cfg = config(&allowed, Some(&answers));

        let results = run_simulation(&answers, &cfg, false).unwrap();
        assert_eq!(results.len(), answers.len());
        assert!(results.iter().all(|r| r.solved));
    }

    #[test]
    fn forced_first_guess_is_used() {
        let allowed = words(&["crane", "slate", "irate", "crate", "grate"]);
        let answers = words(&["irate", "crate", "grate"]);
        let secret = Word::new("irate").unwrap();

        let mut cfg = config(&allowed, Some(&answers));
        cfg.first_guess = Some("slate");

        let result = simulate_game(&secret, &cfg).unwrap();
        assert_eq!(result.first_guess.as_deref(), Some("slate"));
        assert!(result.solved);
    }

    #[test]
    fn invalid_forced_guess_propagates() {
        let allowed = words(&["crane", "slate", "irate"]);
        let answers = words(&["crane", "slate", "irate"]);
        let secret = Word::new("crane").unwrap();

        let mut cfg = config(&allowed, Some(&answers));
        cfg.first_guess = Some("zzzzz");

        assert!(matches!(
            simulate_game(&secret, &cfg),
            Err(SolverError::InvalidGuess(_))
        ));
    }

    #[test]
    fn secret_outside_answer_list_fails_cleanly() {
        let allowed = words(&["crane", "slate", "irate", "vivid"]);
        let answers = words(&["crane", "slate", "irate"]);
        let secret = Word::new("vivid").unwrap();

        let result = simulate_game(&secret, &config(&allowed, Some(&answers))).unwrap();
        assert!(!result.solved);
    }

    #[test]
    fn summarize_counts_and_distribution() {
        let results = vec![
            GameResult {
                secret: "crane".into(),
                solved: true,
                turns: 3,
                final_candidates: 1,
                first_guess: Some("soare".into()),
            },
            GameResult {
                secret: "slate".into(),
                solved: true,
                turns: 4,
                final_candidates: 1,
                first_guess: Some("soare".into()),
            },
            GameResult {
                secret: "vivid".into(),
                solved: false,
                turns: 6,
                final_candidates: 2,
                first_guess: Some("soare".into()),
            },
        ];

        let stats = summarize(&results);

        assert_eq!(stats.games, 3);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_turns - 3.5).abs() < 1e-9);
        assert!((stats.median_turns - 3.5).abs() < 1e-9);
        assert_eq!(stats.turn_distribution.get(&3), Some(&1));
        assert_eq!(stats.turn_distribution.get(&4), Some(&1));
        assert_eq!(stats.most_common_first_guess, Some(("soare".into(), 3)));
        assert_eq!(stats.failed_examples, vec!["vivid".to_string()]);
    }

    #[test]
    fn summarize_empty_batch() {
        let stats = summarize(&[]);
        assert_eq!(stats.games, 0);
        assert_eq!(stats.solved, 0);
        assert!(stats.turn_distribution.is_empty());
        assert!(stats.most_common_first_guess.is_none());
    }

    #[test]
    fn distribution_sums_to_solved_count() {
        let allowed = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let answers = words(&["irate", "crate", "grate", "trace"]);
        let cfg = config(&allowed, Some(&answers));

        let results = run_simulation(&answers, &cfg, false).unwrap();
        let stats = summarize(&results);

        let distribution_sum: usize = stats.turn_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
        assert_eq!(stats.games, stats.solved + stats.failed);
    }
}
