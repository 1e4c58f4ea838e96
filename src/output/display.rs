//! Display functions for command results

use super::formatters::entropy_bar;
use crate::commands::simulate::SimulationStats;
use crate::core::Word;
use colored::Colorize;

/// Print a ranked suggestion table
pub fn print_suggestions(suggestions: &[(Word, f64)]) {
    println!("\n{}", "Top suggestions (guess | expected bits):".bold());
    for (rank, (word, bits)) in suggestions.iter().enumerate() {
        println!(
            "  {:>2}. {}  [{}] {}",
            rank + 1,
            word.text().to_uppercase().bright_white().bold(),
            entropy_bar(*bits, 20).green(),
            format!("{bits:.4}").bright_yellow(),
        );
    }
}

/// Print the summary of a simulation batch
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if stats.games == 0 {
        println!("\n   No games played.");
        return;
    }

    let solved_pct = stats.solved as f64 / stats.games as f64 * 100.0;
    let failed_pct = stats.failed as f64 / stats.games as f64 * 100.0;

    println!("\n   Games:    {}", stats.games);
    println!(
        "   Solved:   {} ({})",
        stats.solved,
        format!("{solved_pct:.2}%").green()
    );
    println!(
        "   Failed:   {} ({})",
        stats.failed,
        format!("{failed_pct:.2}%").red()
    );

    if stats.solved > 0 {
        println!(
            "\n   Avg turns (solved):    {}",
            format!("{:.3}", stats.average_turns).bright_yellow().bold()
        );
        println!("   Median turns (solved): {:.1}", stats.median_turns);

        println!("\n   {}", "Turn distribution (solved):".bright_cyan());
        let mut turns: Vec<usize> = stats.turn_distribution.keys().copied().collect();
        turns.sort_unstable();
        for turn in turns {
            let count = stats.turn_distribution[&turn];
            let pct = count as f64 / stats.games as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {turn}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if let Some((guess, count)) = &stats.most_common_first_guess {
        println!(
            "\n   Most common first guess: {} ({count} / {})",
            guess.to_uppercase().bright_white().bold(),
            stats.games
        );
    }

    if !stats.failed_examples.is_empty() {
        println!(
            "\n   Failed examples (up to 10): {}",
            stats.failed_examples.join(", ").red()
        );
    }
}
