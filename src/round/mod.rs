//! Round state machine
//!
//! A round owns one secret and advances from `AwaitingGuess(1)` to either
//! `Won` or `Lost`. [`run_round`] drives a round to completion against a
//! [`GuessSource`] and a [`Reporter`]; front ends that are event driven (the
//! TUI) call [`Round::submit`] directly.

mod stats;

pub use stats::Statistics;

use crate::core::{Verdict, Word, score};
use crate::error::GameError;
use log::{debug, info};

/// Supplies one already-validated guess per attempt
pub trait GuessSource {
    /// Produce the guess for `attempt` (1-based)
    ///
    /// # Errors
    ///
    /// Implementations return an error when no guess can be obtained, e.g.
    /// the input stream closed.
    fn next_guess(&mut self, attempt: usize) -> Result<Word, GameError>;
}

/// Receives the result of every attempt and the final outcome
///
/// Rendering is entirely up to the implementation. Errors (typically a
/// failed write to the terminal) abort the round.
pub trait Reporter {
    /// Called once per attempt with the scored guess
    ///
    /// # Errors
    ///
    /// Returns an error if the verdict could not be delivered.
    fn attempt(
        &mut self,
        attempt: usize,
        guess: &Word,
        verdict: &Verdict,
    ) -> Result<(), GameError>;

    /// Called once when the round reaches Won or Lost
    ///
    /// # Errors
    ///
    /// Returns an error if the outcome could not be delivered.
    fn finished(&mut self, outcome: &Outcome) -> Result<(), GameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess { attempt: usize },
    Won { attempts: usize },
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// How a finished round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost { secret: Word },
}

/// Reject attempt limits that would make a round unplayable
///
/// # Errors
///
/// Returns `GameError::InvalidConfiguration` if `max_attempts` is zero.
pub fn check_max_attempts(max_attempts: usize) -> Result<(), GameError> {
    if max_attempts < 1 {
        return Err(GameError::InvalidConfiguration(format!(
            "max attempts must be at least 1, got {max_attempts}"
        )));
    }
    Ok(())
}

/// One round of play against a single secret
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    max_attempts: usize,
    state: RoundState,
    history: Vec<(Word, Verdict)>,
}

impl Round {
    /// Start a round at attempt 1
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if `max_attempts` is zero.
    pub fn new(secret: Word, max_attempts: usize) -> Result<Self, GameError> {
        check_max_attempts(max_attempts)?;

        Ok(Self {
            secret,
            max_attempts,
            state: RoundState::AwaitingGuess { attempt: 1 },
            history: Vec::new(),
        })
    }

    /// Score a guess and advance the state machine
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundFinished` if the round already ended; the
    /// round is left untouched.
    pub fn submit(&mut self, guess: Word) -> Result<Verdict, GameError> {
        let RoundState::AwaitingGuess { attempt } = self.state else {
            return Err(GameError::RoundFinished);
        };

        let verdict = score(&guess, &self.secret);
        self.state = if verdict.is_solved() {
            RoundState::Won { attempts: attempt }
        } else if attempt == self.max_attempts {
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess {
                attempt: attempt + 1,
            }
        };
        debug!("attempt {attempt}: {guess} {verdict} -> {:?}", self.state);

        self.history.push((guess, verdict));
        Ok(verdict)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Guesses made so far with their verdicts, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Verdict)] {
        &self.history
    }

    /// The secret, for revealing after a loss
    ///
    /// Returns None while the round is still in play.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.is_finished().then_some(&self.secret)
    }
}

/// Play one round to completion
///
/// Asks `source` for exactly one guess per attempt and tells `reporter`
/// about each verdict, then reports the outcome once.
///
/// # Errors
///
/// Returns `GameError::InvalidConfiguration` before any attempt if
/// `max_attempts` is zero, or whatever error `source` or `reporter` raises.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word};
/// use wordle_game::error::GameError;
/// use wordle_game::round::{GuessSource, Outcome, Reporter, run_round};
///
/// struct Always(Word);
/// impl GuessSource for Always {
///     fn next_guess(&mut self, _attempt: usize) -> Result<Word, GameError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// struct Quiet;
/// impl Reporter for Quiet {
///     fn attempt(&mut self, _: usize, _: &Word, _: &Verdict) -> Result<(), GameError> {
///         Ok(())
///     }
///     fn finished(&mut self, _: &Outcome) -> Result<(), GameError> {
///         Ok(())
///     }
/// }
///
/// let secret = Word::new("crane").unwrap();
/// let outcome = run_round(secret.clone(), 6, &mut Always(secret), &mut Quiet).unwrap();
/// assert_eq!(outcome, Outcome::Won { attempts: 1 });
/// ```
pub fn run_round<G, R>(
    secret: Word,
    max_attempts: usize,
    source: &mut G,
    reporter: &mut R,
) -> Result<Outcome, GameError>
where
    G: GuessSource + ?Sized,
    R: Reporter + ?Sized,
{
    let mut round = Round::new(secret, max_attempts)?;

    let outcome = loop {
        let attempt = match round.state() {
            RoundState::AwaitingGuess { attempt } => attempt,
            RoundState::Won { attempts } => break Outcome::Won { attempts },
            RoundState::Lost => break Outcome::Lost {
                secret: round.secret,
            },
        };

        let guess = source.next_guess(attempt)?;
        let verdict = round.submit(guess.clone())?;
        reporter.attempt(attempt, &guess, &verdict)?;
    };
    info!("round finished: {outcome:?}");
    reporter.finished(&outcome)?;
    Ok(outcome)
}
