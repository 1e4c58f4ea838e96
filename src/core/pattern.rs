//! Feedback pattern evaluation and representation
//!
//! A pattern encodes the per-position feedback for a guess using base-3
//! digits:
//! - 0 = absent (letter not in the secret)
//! - 1 = present (letter in the secret, wrong position)
//! - 2 = match (letter in the correct position)
//!
//! The five digits are packed into a single u8 (0..=242), position 0 being
//! the least significant digit. The value is an equality/hash key only;
//! its magnitude carries no meaning.

use super::Word;
use crate::error::SolverError;

/// Feedback for one guess against one secret, packed base-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All five positions match
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a pattern from a raw packed value.
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "pattern value must be < 243");
        Self(value)
    }

    /// The raw packed value (0..=242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether every position is a match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Evaluate the feedback the game would give for `guess` when the
    /// answer is `secret`.
    ///
    /// Two passes, so duplicate letters are handled exactly: the first pass
    /// marks positional matches and consumes those occurrences from the
    /// secret's letter multiset; the second marks a non-match position as
    /// present only while unconsumed occurrences of its letter remain.
    /// Every letter occurrence in the secret is therefore credited at most
    /// once across match and present positions, and a guess with repeated
    /// letters is never over-rewarded.
    ///
    /// The result is a pure function of (secret, guess) and is
    /// guess-relative: swapping the arguments gives a different answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// // c absent, r absent, a match, n absent, e match
    /// assert_eq!(Pattern::evaluate(&secret, &guess), Pattern::parse("bbgbg").unwrap());
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut digits = [0u8; 5];
        let mut remaining = secret.char_counts();

        // First pass: matches consume their occurrence
        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                digits[i] = 2;
                if let Some(count) = remaining.get_mut(&g) {
                    *count -= 1;
                }
            }
        }

        // Second pass: present-elsewhere, only while occurrences remain
        for (i, &g) in guess.chars().iter().enumerate() {
            if digits[i] == 0
                && let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                digits[i] = 1;
                *count -= 1;
            }
        }

        Self::from_digits(digits)
    }

    /// Pack five ternary digits, position 0 least significant
    fn from_digits(digits: [u8; 5]) -> Self {
        let mut value = 0u16;
        let mut place = 1u16;
        for digit in digits {
            value += u16::from(digit) * place;
            place *= 3;
        }
        Self(value as u8)
    }

    /// Unpack into five ternary digits, one per position
    #[must_use]
    pub fn digits(self) -> [u8; 5] {
        let mut digits = [0u8; 5];
        let mut value = self.0;
        for digit in &mut digits {
            *digit = value % 3;
            value /= 3;
        }
        digits
    }

    /// Parse an externally supplied feedback string.
    ///
    /// Accepts 5 letters of `g`/`y`/`b` (match / present / absent) or 5
    /// digits of `2`/`1`/`0` with the same meaning; the mapping is exactly
    /// g↔2, y↔1, b↔0, and the two alphabets cannot be mixed in one string.
    /// Input is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidInput`] for a wrong length or a
    /// character outside the allowed set.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// assert_eq!(Pattern::parse("bygyb").unwrap(), Pattern::parse("01210").unwrap());
    /// assert_eq!(Pattern::parse("ggggg").unwrap(), Pattern::PERFECT);
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let normalized = s.trim().to_lowercase();

        let digits = if normalized.len() == 5
            && normalized.bytes().all(|b| matches!(b, b'g' | b'y' | b'b'))
        {
            let mut digits = [0u8; 5];
            for (slot, byte) in digits.iter_mut().zip(normalized.bytes()) {
                *slot = match byte {
                    b'g' => 2,
                    b'y' => 1,
                    _ => 0,
                };
            }
            digits
        } else if normalized.len() == 5 && normalized.bytes().all(|b| matches!(b, b'0'..=b'2')) {
            let mut digits = [0u8; 5];
            for (slot, byte) in digits.iter_mut().zip(normalized.bytes()) {
                *slot = byte - b'0';
            }
            digits
        } else {
            return Err(SolverError::InvalidInput(format!(
                "pattern must be 5 chars of [g,y,b] or [2,1,0], got {s:?}"
            )));
        };

        Ok(Self::from_digits(digits))
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
