//! Keyboard hints accumulated over a round

use super::verdict::{Mark, Verdict};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Strongest mark seen so far for each guessed letter
#[derive(Debug, Clone, Default)]
pub struct LetterBoard {
    marks: FxHashMap<u8, Mark>,
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the board
    ///
    /// A letter only ever gets promoted: Absent < Present < Exact. This keeps
    /// a duplicate guess letter marked Absent from hiding a Present one.
    pub fn record(&mut self, guess: &Word, verdict: &Verdict) {
        for (&letter, &mark) in guess.letters().iter().zip(verdict.marks()) {
            self.marks
                .entry(letter)
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }
    }

    /// Best known mark for `letter`, or None if it was never guessed
    #[must_use]
    pub fn mark(&self, letter: u8) -> Option<Mark> {
        self.marks.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn unguessed_letters_have_no_mark() {
        let board = LetterBoard::new();
        assert_eq!(board.mark(b'A'), None);
    }

    #[test]
    fn duplicate_absent_does_not_downgrade_present() {
        let guess = Word::new("lilac").unwrap();
        let secret = Word::new("light").unwrap();
        let mut board = LetterBoard::new();
        board.record(&guess, &score(&guess, &secret));

        assert_eq!(board.mark(b'L'), Some(Mark::Exact));
        assert_eq!(board.mark(b'I'), Some(Mark::Present));
        assert_eq!(board.mark(b'a'), Some(Mark::Absent));
    }

    #[test]
    fn later_guesses_promote_letters() {
        let secret = Word::new("rivet").unwrap();
        let mut board = LetterBoard::new();

        let first = Word::new("terri").unwrap();
        board.record(&first, &score(&first, &secret));
        assert_eq!(board.mark(b'R'), Some(Mark::Present));

        let second = Word::new("rival").unwrap();
        board.record(&second, &score(&second, &secret));
        assert_eq!(board.mark(b'R'), Some(Mark::Exact));

        board.clear();
        assert_eq!(board.mark(b'R'), None);
    }
}
