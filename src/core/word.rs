//! Word representation
//!
//! A Word is a validated 5-letter lowercase ASCII token. Validation happens
//! once at construction; everything downstream can assume the invariant.

use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter word, stored as text plus a fixed byte array for cheap
/// positional access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

impl Word {
    /// Create a new Word from a string.
    ///
    /// Input is trimmed and lowercased before validation, so `" CRANE "` is
    /// accepted and normalizes to `"crane"`.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidInput`] if the normalized text is not
    /// exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cran3").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, SolverError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.len() != 5 {
            return Err(SolverError::InvalidInput(format!(
                "word must be exactly 5 letters, got {} in {text:?}",
                text.len()
            )));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidInput(format!(
                "word must contain only ASCII letters: {text:?}"
            )));
        }

        // Safe to unwrap: length was validated above
        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// The letter multiset of this word, used by feedback evaluation to
    /// consume letter occurrences at most once each.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
