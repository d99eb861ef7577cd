//! Simple line-mode game
//!
//! Text-based play without the TUI: prompts for guesses on one stream and
//! prints hints on another, round after round until the player stops or the
//! pool runs dry.

use crate::core::Word;
use crate::error::GameError;
use crate::output::ConsoleReporter;
use crate::pool::WordPool;
use crate::round::{GuessSource, Statistics, check_max_attempts, run_round};
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

/// Reads guesses from a line-oriented input, re-prompting until valid
pub struct PromptGuessSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptGuessSource<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a yes/no question; anything but yes, and end of input, is no
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, GameError> {
        match self.prompt(prompt)? {
            Some(answer) => Ok(matches!(
                answer.trim().to_lowercase().as_str(),
                "y" | "yes"
            )),
            None => Ok(false),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line; None at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> GuessSource for PromptGuessSource<R, W> {
    fn next_guess(&mut self, attempt: usize) -> Result<Word, GameError> {
        loop {
            let line = self
                .prompt(&format!("Attempt {attempt}: "))?
                .ok_or(GameError::InputClosed)?;

            match Word::new(line.trim()) {
                Ok(word) => return Ok(word),
                Err(e) => {
                    debug!("rejected guess {:?}: {e}", line.trim());
                    writeln!(self.output, "Invalid guess. Must be exactly 5 letters.")?;
                }
            }
        }
    }
}

/// Play rounds until the player declines another or the pool is empty
///
/// # Errors
///
/// Returns an error if:
/// - `max_attempts` is zero (before anything is drawn)
/// - The pool is empty when the first round starts
/// - Any I/O fails
///
/// Input closing mid-round ends the session normally; the unfinished round
/// is not counted.
pub fn run_simple<R, W, O, G>(
    pool: &mut WordPool,
    rng: &mut G,
    max_attempts: usize,
    source: &mut PromptGuessSource<R, W>,
    reporter: &mut ConsoleReporter<O>,
) -> Result<Statistics, GameError>
where
    R: BufRead,
    W: Write,
    O: Write,
    G: Rng + ?Sized,
{
    check_max_attempts(max_attempts)?;

    let mut stats = Statistics::new();

    loop {
        let secret = match pool.draw(rng) {
            Ok(word) => word,
            Err(GameError::PoolExhausted) if stats.rounds_played > 0 => {
                reporter.note("No words left to play.")?;
                break;
            }
            Err(e) => return Err(e),
        };

        reporter.reset();
        reporter.note(&format!(
            "Round {}: guess the 5-letter word. You have {max_attempts} attempts.",
            stats.rounds_played + 1
        ))?;

        let outcome = match run_round(secret, max_attempts, source, reporter) {
            Ok(outcome) => outcome,
            // End of input is how the player walks away mid-round
            Err(GameError::InputClosed) => {
                reporter.note("\nInput closed, ending the session.")?;
                break;
            }
            Err(e) => return Err(e),
        };
        stats.record(&outcome);

        if pool.is_empty() {
            reporter.note("No words left to play.")?;
            break;
        }
        if !source.confirm("Play again? (yes/no): ")? {
            break;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn source(input: &str) -> PromptGuessSource<Cursor<Vec<u8>>, Vec<u8>> {
        PromptGuessSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn next_guess_reprompts_until_valid() {
        let mut source = source("abc\nkotlin\nl1ght\nlight\n");

        let guess = source.next_guess(2).unwrap();
        assert_eq!(guess.text(), "LIGHT");

        let prompts = String::from_utf8(source.into_output()).unwrap();
        assert_eq!(prompts.matches("Attempt 2: ").count(), 4);
        assert_eq!(
            prompts
                .matches("Invalid guess. Must be exactly 5 letters.")
                .count(),
            3
        );
    }

    #[test]
    fn next_guess_reports_closed_input() {
        let mut source = source("abc\n");
        assert!(matches!(source.next_guess(1), Err(GameError::InputClosed)));
    }

    #[test]
    fn confirm_accepts_yes_variants_only() {
        assert!(source("yes\n").confirm("? ").unwrap());
        assert!(source(" Y \n").confirm("? ").unwrap());
        assert!(!source("no\n").confirm("? ").unwrap());
        assert!(!source("").confirm("? ").unwrap());
    }

    #[test]
    fn session_stops_when_pool_is_empty() {
        let mut pool = WordPool::load(["LIGHT"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = source("crane\nlight\n");
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        let stats = run_simple(&mut pool, &mut rng, 6, &mut source, &mut reporter).unwrap();

        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("You guessed the word LIGHT in 2 attempts."));
        assert!(text.contains("No words left to play."));
    }

    #[test]
    fn session_ends_quietly_when_input_closes() {
        let mut pool = WordPool::load(["LIGHT", "CRANE"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = source("abcde\n");
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        let stats = run_simple(&mut pool, &mut rng, 6, &mut source, &mut reporter).unwrap();

        assert_eq!(stats.rounds_played, 0);
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.contains("Input closed, ending the session."));
    }

    #[test]
    fn session_with_empty_pool_fails() {
        let mut pool = WordPool::load(["TEST"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = source("");
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        let result = run_simple(&mut pool, &mut rng, 6, &mut source, &mut reporter);
        assert!(matches!(result, Err(GameError::PoolExhausted)));
    }

    #[test]
    fn session_with_huge_attempt_limit() {
        let mut pool = WordPool::load(["LIGHT"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = source("crane\nlight\n");
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        let stats =
            run_simple(&mut pool, &mut rng, usize::MAX, &mut source, &mut reporter).unwrap();
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 0, 1]);
    }

    #[test]
    fn session_rejects_zero_attempts_before_drawing() {
        let mut pool = WordPool::load(["LIGHT"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut source = source("light\n");
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        let result = run_simple(&mut pool, &mut rng, 0, &mut source, &mut reporter);
        assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
        assert_eq!(pool.len(), 1);
    }
}
