//! Formatting utilities for terminal output

use crate::core::{LetterBoard, Mark, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Keyboard layout used for the letter hints
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color a single letter according to its mark
#[must_use]
pub fn colored_letter(letter: u8, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match mark {
        Some(Mark::Exact) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn tile_row(guess: &Word, verdict: &Verdict) -> String {
    guess
        .letters()
        .iter()
        .zip(verdict.marks())
        .map(|(&letter, &mark)| colored_letter(letter, Some(mark)).to_string())
        .collect()
}

/// Render the keyboard with each letter colored by its best known mark
#[must_use]
pub fn keyboard_rows(board: &LetterBoard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| colored_letter(letter, board.mark(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Letters known to be absent, alphabetically, e.g. "A C N"
#[must_use]
pub fn ruled_out_letters(board: &LetterBoard) -> String {
    let letters: Vec<String> = (b'A'..=b'Z')
        .filter(|&letter| board.mark(letter) == Some(Mark::Absent))
        .map(|letter| char::from(letter).to_string())
        .collect();
    letters.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn board_for(guess: &str, secret: &str) -> LetterBoard {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        let mut board = LetterBoard::new();
        board.record(&guess, &score(&guess, &secret));
        board
    }

    #[test]
    fn ruled_out_lists_absent_letters_in_order() {
        let board = board_for("crane", "light");
        assert_eq!(ruled_out_letters(&board), "A C E N R");
    }

    #[test]
    fn ruled_out_empty_when_nothing_absent() {
        assert_eq!(ruled_out_letters(&LetterBoard::new()), "");
    }

    #[test]
    fn tile_row_contains_every_letter() {
        let guess = Word::new("steel").unwrap();
        let secret = Word::new("spell").unwrap();
        let row = tile_row(&guess, &score(&guess, &secret));
        for letter in ['S', 'T', 'E', 'L'] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn keyboard_has_three_rows_with_all_letters() {
        let rows = keyboard_rows(&LetterBoard::new());
        assert_eq!(rows.len(), 3);
        let all: String = rows.concat();
        for letter in 'A'..='Z' {
            assert!(all.contains(letter), "missing {letter}");
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
