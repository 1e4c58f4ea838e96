//! Word list loading utilities
//!
//! Lists are plain text, one token per line. Tokens are normalized to
//! lowercase, anything that is not a 5-letter alphabetic token is skipped,
//! and duplicates are dropped keeping the first occurrence, so list order
//! is meaningful downstream (it breaks scoring ties).

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. Unusable lines are not
/// errors; they are skipped.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::load_from_file;
///
/// let words = load_from_file("official_allowed_guesses.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert a string slice into a deduplicated Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<[u8; 5]> = FxHashSet::default();
    let mut words = Vec::new();

    for line in lines {
        if let Ok(word) = Word::new(line)
            && seen.insert(*word.chars())
        {
            words.push(word);
        }
    }

    words
}
