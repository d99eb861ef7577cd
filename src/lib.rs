//! Wordle Game
//!
//! A terminal word-guessing game: guess the hidden five-letter word, with
//! duplicate-aware hints after every attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Mark, Word, score};
//!
//! let guess = Word::new("steel").unwrap();
//! let secret = Word::new("spell").unwrap();
//!
//! let verdict = score(&guess, &secret);
//! assert_eq!(verdict.marks()[0], Mark::Exact);
//! assert_eq!(verdict.to_emoji(), "🟩⬜🟩⬜🟨");
//! ```

// Core domain types
pub mod core;

// Error type shared by the game core and its collaborators
pub mod error;

// Secret word selection
pub mod pool;

// Round state machine
pub mod round;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
