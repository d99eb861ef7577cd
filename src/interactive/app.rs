//! TUI application state and logic

use crate::core::{LetterBoard, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::pool::WordPool;
use crate::round::{Outcome, Round, RoundState, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const ROUND_OVER_HINT: &str = "Press 'n' for a new round or 'q' to quit.";

/// Application state
pub struct App {
    pub pool: WordPool,
    rng: StdRng,
    pub round: Round,
    pub board: LetterBoard,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Draw the first secret and set up a fresh session
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` for a zero attempt limit and
    /// `GameError::PoolExhausted` if the pool has no words.
    pub fn new(
        mut pool: WordPool,
        mut rng: StdRng,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        // Checked before drawing so a bad limit leaves the pool untouched
        crate::round::check_max_attempts(max_attempts)?;
        let secret = pool.draw(&mut rng)?;
        let round = Round::new(secret, max_attempts)?;

        let mut app = Self {
            pool,
            rng,
            round,
            board: LetterBoard::new(),
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::new(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the 5-letter word. You have {max_attempts} attempts."),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Validate the typed word and play it
    ///
    /// Invalid input stays in the buffer with an error message, so the
    /// player can fix it; the round never sees it.
    pub fn submit_guess(&mut self) {
        let guess = match Word::new(&self.input_buffer) {
            Ok(word) => word,
            Err(e) => {
                debug!("rejected guess {:?}: {e}", self.input_buffer);
                self.add_message(
                    "Invalid guess. Must be exactly 5 letters.",
                    MessageStyle::Error,
                );
                return;
            }
        };

        let verdict = match self.round.submit(guess.clone()) {
            Ok(verdict) => verdict,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.board.record(&guess, &verdict);
        self.input_buffer.clear();

        match self.round.state() {
            RoundState::AwaitingGuess { attempt } => {
                let left = self.round.max_attempts() - attempt + 1;
                self.add_message(
                    &format!("{} {}", verdict.hint(&guess), attempts_left(left)),
                    MessageStyle::Info,
                );
            }
            RoundState::Won { attempts } => {
                self.stats.record(&Outcome::Won { attempts });
                self.input_mode = InputMode::RoundOver;

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    n => format!("🎉 SOLVED in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message(ROUND_OVER_HINT, MessageStyle::Info);
            }
            RoundState::Lost => {
                if let Some(secret) = self.round.revealed_secret().cloned() {
                    self.add_message(
                        &format!("Out of attempts. The word was: {secret}"),
                        MessageStyle::Error,
                    );
                    self.stats.record(&Outcome::Lost { secret });
                }
                self.input_mode = InputMode::RoundOver;
                self.add_message(ROUND_OVER_HINT, MessageStyle::Info);
            }
        }
    }

    /// Start the next round with a fresh secret from the same pool
    pub fn new_round(&mut self) {
        let secret = match self.pool.draw(&mut self.rng) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(
                    &format!("Cannot start a new round: {e}. Press 'q' to quit."),
                    MessageStyle::Error,
                );
                return;
            }
        };

        match Round::new(secret, self.round.max_attempts()) {
            Ok(round) => self.round = round,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.board.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New round! {} words left in the pool.", self.pool.len()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn attempts_left(left: usize) -> String {
    if left == 1 {
        "(last attempt!)".to_string()
    } else {
        format!("({left} attempts left)")
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::RoundOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::RoundOver, KeyCode::Char('n')) => app.new_round(),
                (InputMode::Guessing, KeyCode::Char(c)) => app.push_letter(c),
                (InputMode::Guessing, KeyCode::Backspace) => app.pop_letter(),
                (InputMode::Guessing, KeyCode::Enter) => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(words: &[&str], max_attempts: usize) -> App {
        let pool = WordPool::load(words);
        App::new(pool, StdRng::seed_from_u64(5), max_attempts).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
        app.submit_guess();
    }

    #[test]
    fn new_app_draws_first_secret() {
        let app = app(&["LIGHT", "CRANE"], 6);
        assert_eq!(app.pool.len(), 1);
        assert_eq!(app.round.state(), RoundState::AwaitingGuess { attempt: 1 });
    }

    #[test]
    fn new_app_with_empty_pool_fails() {
        let result = App::new(WordPool::default(), StdRng::seed_from_u64(0), 6);
        assert!(matches!(result, Err(GameError::PoolExhausted)));
    }

    #[test]
    fn huge_attempt_limit_plays_normally() {
        let mut app = app(&["LIGHT"], usize::MAX);
        type_word(&mut app, "crane");
        type_word(&mut app, "light");

        assert_eq!(app.round.state(), RoundState::Won { attempts: 2 });
        assert_eq!(app.stats.guess_distribution, vec![0, 0, 1]);
    }

    #[test]
    fn input_buffer_accepts_only_five_letters() {
        let mut app = app(&["LIGHT"], 6);
        for c in "li9ghtxyz".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "LIGHT");
        app.pop_letter();
        assert_eq!(app.input_buffer, "LIGH");
    }

    #[test]
    fn short_guess_is_rejected_without_using_an_attempt() {
        let mut app = app(&["LIGHT"], 6);
        type_word(&mut app, "lig");
        assert_eq!(app.round.state(), RoundState::AwaitingGuess { attempt: 1 });
        assert_eq!(app.input_buffer, "LIG");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_guess_ends_round_and_records_stats() {
        let mut app = app(&["LIGHT"], 6);
        type_word(&mut app, "crane");
        type_word(&mut app, "light");

        assert_eq!(app.round.state(), RoundState::Won { attempts: 2 });
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.board.mark(b'L'), Some(crate::core::Mark::Exact));
    }

    #[test]
    fn losing_reveals_secret() {
        let mut app = app(&["LIGHT"], 2);
        type_word(&mut app, "crane");
        type_word(&mut app, "crane");

        assert_eq!(app.round.state(), RoundState::Lost);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Out of attempts. The word was: LIGHT")
        );
    }

    #[test]
    fn new_round_draws_from_remaining_pool() {
        let mut app = app(&["LIGHT", "CRANE"], 6);
        assert!(app.round.revealed_secret().is_none());

        type_word(&mut app, "light");
        type_word(&mut app, "crane");
        app.new_round();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.pool.is_empty());
        assert!(app.round.history().is_empty());
        assert_eq!(app.board.mark(b'L'), None);
    }

    #[test]
    fn new_round_on_exhausted_pool_keeps_finished_board() {
        let mut app = app(&["LIGHT"], 1);
        type_word(&mut app, "crane");
        app.new_round();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.round.state(), RoundState::Lost);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }
}
