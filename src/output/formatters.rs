//! Formatting utilities for terminal output

use crate::core::Pattern;
use colored::Colorize;

/// Render a pattern as colored tile blocks
#[must_use]
pub fn pattern_tiles(pattern: Pattern) -> String {
    let mut out = String::new();
    for digit in pattern.digits() {
        let tile = match digit {
            2 => "■".green().to_string(),
            1 => "■".yellow().to_string(),
            _ => "■".bright_black().to_string(),
        };
        out.push_str(&tile);
    }
    out
}

/// Render a pattern in the g/y/b input alphabet
#[must_use]
pub fn pattern_letters(pattern: Pattern) -> String {
    pattern
        .digits()
        .iter()
        .map(|&digit| match digit {
            2 => 'g',
            1 => 'y',
            _ => 'b',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar against the 5-slot ternary ceiling
#[must_use]
pub fn entropy_bar(bits: f64, width: usize) -> String {
    let max_bits = 243f64.log2(); // log2(3^5) ≈ 7.93
    create_progress_bar(bits, max_bits, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_letters_round_trips_with_parse() {
        for text in ["bbbbb", "ggggg", "bygyb", "gybbg"] {
            let pattern = Pattern::parse(text).unwrap();
            assert_eq!(pattern_letters(pattern), text);
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(create_progress_bar(250.0, 100.0, 10), "██████████");
    }

    #[test]
    fn entropy_bar_never_exceeds_width() {
        for bits in [0.0, 1.5, 5.9, 7.93, 12.0] {
            assert_eq!(entropy_bar(bits, 20).chars().count(), 20);
        }
    }
}
