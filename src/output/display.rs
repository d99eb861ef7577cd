//! Console rendering of rounds and session results

use super::formatters::{create_progress_bar, keyboard_rows, ruled_out_letters, tile_row};
use crate::core::{LetterBoard, Verdict, Word};
use crate::error::GameError;
use crate::round::{Outcome, Reporter, Statistics};
use colored::Colorize;
use std::io::Write;

/// Line-mode reporter writing hints and outcomes to any writer
///
/// With `color` off the output is plain text, suitable for pipes and tests.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    board: LetterBoard,
    last_guess: Option<Word>,
}

impl<W: Write> ConsoleReporter<W> {
    #[must_use]
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            board: LetterBoard::new(),
            last_guess: None,
        }
    }

    /// Forget the letter hints of the previous round
    pub fn reset(&mut self) {
        self.board.clear();
        self.last_guess = None;
    }

    /// Write a free-form announcement line
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    pub fn note(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn attempt(
        &mut self,
        _attempt: usize,
        guess: &Word,
        verdict: &Verdict,
    ) -> Result<(), GameError> {
        self.board.record(guess, verdict);
        self.last_guess = Some(guess.clone());

        if self.color {
            writeln!(self.out, "{}", tile_row(guess, verdict))?;
            for row in keyboard_rows(&self.board) {
                writeln!(self.out, "{row}")?;
            }
        } else {
            writeln!(self.out, "Hint: {}  {}", verdict.hint(guess), verdict.to_emoji())?;
            let ruled_out = ruled_out_letters(&self.board);
            if !ruled_out.is_empty() {
                writeln!(self.out, "Not in word: {ruled_out}")?;
            }
        }
        Ok(())
    }

    fn finished(&mut self, outcome: &Outcome) -> Result<(), GameError> {
        let message = match (outcome, &self.last_guess) {
            (Outcome::Won { attempts }, Some(word)) => format!(
                "Congratulations! You guessed the word {word} in {attempts} {}.",
                if *attempts == 1 { "attempt" } else { "attempts" }
            ),
            (Outcome::Won { attempts }, None) => {
                format!("Congratulations! Solved in {attempts} attempts.")
            }
            (Outcome::Lost { secret }, _) => format!("Out of attempts. The word was: {secret}"),
        };

        if self.color {
            let styled = match outcome {
                Outcome::Won { .. } => message.green().bold(),
                Outcome::Lost { .. } => message.red().bold(),
            };
            writeln!(self.out, "{styled}")?;
        } else {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }
}

/// Print the verdict for a single guess/secret pair
pub fn print_score_result(guess: &Word, verdict: &Verdict) {
    println!("{}", tile_row(guess, verdict));
    println!("Hint: {}", verdict.hint(guess));
    println!("{}", verdict.to_emoji());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "SESSION STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Rounds played:  {}", stats.rounds_played);
    println!(
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak: {}", stats.current_streak);
    println!("   Best streak:    {}", stats.best_streak);

    if stats.rounds_won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempt, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {attempt}: {} {count:3}", bar.green());
    }
}
