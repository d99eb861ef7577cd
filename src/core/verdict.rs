//! Guess scoring and verdict representation
//!
//! A verdict holds one mark per guess position:
//! - Exact: same letter at the same position in the secret
//! - Present: letter occurs at another, not yet claimed position
//! - Absent: no unclaimed occurrence left in the secret

use super::word::{WORD_LENGTH, Word};
use crate::error::GameError;
use std::fmt;
use std::ops::Index;

/// Per-letter result of comparing a guess to the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Marks for one guess, index-aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LENGTH]);

impl Verdict {
    /// All exact (the guess is the secret)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Exact)
    }

    /// Count the positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert verdict to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }

    /// Text hint for `guess`: exact letters uppercase, present letters
    /// lowercase, absent letters as `?`, separated by spaces.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, score};
    ///
    /// let guess = Word::new("steel").unwrap();
    /// let secret = Word::new("spell").unwrap();
    /// assert_eq!(score(&guess, &secret).hint(&guess), "S ? E ? l");
    /// ```
    #[must_use]
    pub fn hint(&self, guess: &Word) -> String {
        let symbols: Vec<String> = guess
            .letters()
            .iter()
            .zip(self.0)
            .map(|(&letter, mark)| match mark {
                Mark::Exact => char::from(letter).to_string(),
                Mark::Present => char::from(letter.to_ascii_lowercase()).to_string(),
                Mark::Absent => "?".to_string(),
            })
            .collect();
        symbols.join(" ")
    }
}

impl Index<usize> for Verdict {
    type Output = Mark;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `secret`
///
/// Implements the duplicate-aware two-pass rules.
///
/// # Algorithm
/// 1. First pass: mark exact matches and consume those secret positions
/// 2. Second pass, guess positions ascending: claim the first unconsumed
///    secret position holding the same letter (Present), or mark Absent
///
/// Earlier guess positions therefore win a limited supply of secret letters.
///
/// # Examples
/// ```
/// use wordle_game::core::{Mark, Word, score};
///
/// let guess = Word::new("lilac").unwrap();
/// let secret = Word::new("light").unwrap();
/// let verdict = score(&guess, &secret);
///
/// // The second L finds the only L in LIGHT already claimed
/// assert_eq!(verdict.marks()[3], Mark::Absent);
/// ```
#[must_use]
pub fn score(guess: &Word, secret: &Word) -> Verdict {
    let guess = guess.letters();
    let secret = secret.letters();
    let mut marks = [Mark::Absent; WORD_LENGTH];
    let mut consumed = [false; WORD_LENGTH];

    // First pass: exact position matches
    // Allow: index shared by guess, secret, marks and consumed
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            marks[i] = Mark::Exact;
            consumed[i] = true;
        }
    }

    // Second pass: present elsewhere, claiming the leftmost free occurrence
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Exact {
            continue;
        }
        let claim = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
        if let Some(j) = claim {
            marks[i] = Mark::Present;
            consumed[j] = true;
        }
    }

    Verdict(marks)
}

/// Score raw text, validating both words first
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either argument is not a valid word.
pub fn score_str(guess: &str, secret: &str) -> Result<Verdict, GameError> {
    let guess = parse_input("guess", guess)?;
    let secret = parse_input("secret", secret)?;
    Ok(score(&guess, &secret))
}

/// Validate raw user text, naming its `role` in the error
pub(crate) fn parse_input(role: &str, text: &str) -> Result<Word, GameError> {
    Word::new(text).map_err(|e| GameError::InvalidInput(format!("{role} {text:?}: {e}")))
}
