//! Entropy Guess Advisor - CLI
//!
//! Interactive helper, opening-guess ranking, and batch simulation over
//! the entropy-maximizing solver.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{
        PlayConfig, SimulateConfig, run_play, run_rank, run_simulation, summarize,
    },
    core::Word,
    output::print_simulation_stats,
    solver::{DEFAULT_CACHE_FILE, EntropySolver, FirstGuessCache, GuessSpace},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Suggests word-game guesses by maximizing expected information gain",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the allowed guess list (5-letter words, one per line)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Path to the possible answer list; defaults to the allowed list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// How many suggestions to show each turn
    #[arg(long, global = true, default_value_t = 10)]
    top: usize,

    /// Score guesses from all allowed words or only remaining candidates
    #[arg(long, global = true, default_value = "allowed", value_parser = parse_guess_space)]
    guess_space: GuessSpace,

    /// Force a specific first guess (bypasses suggestion)
    #[arg(long, global = true)]
    first_guess: Option<String>,

    /// Location of the persistent first-turn scoring cache
    #[arg(long, global = true, default_value = DEFAULT_CACHE_FILE)]
    cache_file: PathBuf,

    /// Disable the persistent first-turn scoring cache
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper: play elsewhere, type the feedback here (default)
    Play,

    /// Print the top suggestions for a fresh game
    Rank,

    /// Simulate games against a list of secrets and print statistics
    Simulate {
        /// Secrets to test (defaults to the answer list)
        #[arg(long)]
        secrets: Option<PathBuf>,

        /// Limit the number of secrets (0 = no limit)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// Maximum turns per game
        #[arg(long, default_value_t = 6)]
        max_turns: usize,

        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn parse_guess_space(name: &str) -> Result<GuessSpace, String> {
    GuessSpace::from_name(name)
        .ok_or_else(|| format!("expected 'allowed' or 'candidates', got {name:?}"))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let words_path = cli
        .words
        .as_ref()
        .context("no word list given; provide one with --words")?;
    let allowed = load_from_file(words_path)
        .with_context(|| format!("reading word list {}", words_path.display()))?;
    if allowed.is_empty() {
        bail!(
            "loaded 0 usable words from {}; check the file",
            words_path.display()
        );
    }

    let answers = match &cli.answers {
        Some(path) => {
            let answers = load_from_file(path)
                .with_context(|| format!("reading answer list {}", path.display()))?;
            if answers.is_empty() {
                bail!("loaded 0 usable answers from {}; check the file", path.display());
            }
            Some(answers)
        }
        None => None,
    };

    // A forced guess only needs to be a legal play, so validate against the
    // allowed list once, up front.
    if let Some(forced) = &cli.first_guess {
        let normalized = forced.trim().to_lowercase();
        if !allowed.iter().any(|w| w.text() == normalized) {
            bail!("forced first guess {forced:?} is not in the allowed guess list");
        }
    }

    let first_turn_cache = (!cli.no_cache).then(|| FirstGuessCache::new(&cli.cache_file));

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let solver = build_solver(allowed, answers, first_turn_cache.as_ref());
            let config = PlayConfig {
                top_k: cli.top,
                guess_space: cli.guess_space,
                first_guess: cli.first_guess,
            };
            run_play(solver, &config)
        }
        Commands::Rank => {
            let solver = build_solver(allowed, answers, first_turn_cache.as_ref());
            run_rank(solver, cli.top, cli.guess_space)
        }
        Commands::Simulate {
            secrets,
            limit,
            max_turns,
            no_progress,
        } => run_simulate_command(
            &allowed,
            answers.as_deref(),
            secrets.as_deref(),
            limit,
            max_turns,
            !no_progress,
            cli.guess_space,
            cli.first_guess.as_deref(),
            first_turn_cache.as_ref(),
        ),
    }
}

fn build_solver(
    allowed: Vec<Word>,
    answers: Option<Vec<Word>>,
    cache: Option<&FirstGuessCache>,
) -> EntropySolver {
    let mut solver = EntropySolver::new(allowed, answers);
    if let Some(cache) = cache {
        solver = solver.with_first_turn_cache(cache.clone());
    }
    solver
}

#[allow(clippy::too_many_arguments)] // Plain plumbing from CLI flags
fn run_simulate_command(
    allowed: &[Word],
    answers: Option<&[Word]>,
    secrets_path: Option<&std::path::Path>,
    limit: usize,
    max_turns: usize,
    show_progress: bool,
    guess_space: GuessSpace,
    first_guess: Option<&str>,
    first_turn_cache: Option<&FirstGuessCache>,
) -> Result<()> {
    let mut secrets = match secrets_path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading secrets list {}", path.display()))?,
        None => answers.unwrap_or(allowed).to_vec(),
    };

    // Secrets the solver can never reach are skipped, not failed
    let answer_pool = answers.unwrap_or(allowed);
    let before = secrets.len();
    secrets.retain(|secret| answer_pool.contains(secret));
    let skipped = before - secrets.len();

    if limit > 0 {
        secrets.truncate(limit);
    }

    println!(
        "First guess set to: {}",
        first_guess.unwrap_or("(solver choice)")
    );
    println!("Simulating {} games...", secrets.len());

    let config = SimulateConfig {
        allowed,
        answers,
        guess_space,
        max_turns,
        first_guess,
        first_turn_cache,
    };
    let results = run_simulation(&secrets, &config, show_progress)?;

    if skipped > 0 {
        println!("Skipped {skipped} secrets not in the possible answers.");
    }
    print_simulation_stats(&summarize(&results));

    Ok(())
}
