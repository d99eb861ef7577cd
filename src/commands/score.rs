//! One-off scoring command
//!
//! Scores a single guess against a given secret, without playing a round.

use crate::core::{Verdict, Word, parse_input, score};
use crate::error::GameError;

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub verdict: Verdict,
}

/// Score raw `guess` text against raw `secret` text
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either word is malformed.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, GameError> {
    let guess = parse_input("guess", guess)?;
    let secret = parse_input("secret", secret)?;
    let verdict = score(&guess, &secret);
    Ok(ScoreResult { guess, verdict })
}
