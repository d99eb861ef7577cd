//! Core domain types for the game
//!
//! Pure types with no I/O: validated words, the guess scorer and the
//! keyboard hint board built from its verdicts.

mod letters;
mod verdict;
mod word;

pub use letters::LetterBoard;
pub use verdict::{Mark, Verdict, score, score_str};
pub(crate) use verdict::parse_input;
pub use word::{WORD_LENGTH, Word, WordError};
