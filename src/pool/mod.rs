//! Secret word pool
//!
//! Holds the eligible secret words and hands them out one at a time,
//! uniformly at random and without replacement.

use crate::core::Word;
use crate::error::GameError;
use log::debug;
use rand::Rng;

/// Words still available to be drawn as secrets
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool from raw word-list lines
    ///
    /// Each line is trimmed and uppercased; lines that are not exactly five
    /// ASCII letters are skipped. An empty result is allowed here, the
    /// failure surfaces on the first [`draw`](Self::draw).
    ///
    /// # Examples
    /// ```
    /// use wordle_game::pool::WordPool;
    ///
    /// let pool = WordPool::load(["HELLO", "WORLD", "KOTLIN", "TEST"]);
    /// assert_eq!(pool.len(), 2);
    /// ```
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words: Vec<Word> = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                match Word::new(line) {
                    Ok(word) => Some(word),
                    Err(e) => {
                        debug!("skipping word list entry {line:?}: {e}");
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();

        debug!("loaded {} words ({skipped} skipped)", words.len());
        Self { words }
    }

    /// Remove and return a uniformly chosen word
    ///
    /// Every remaining word has the same chance on every call. The drawn
    /// slot is gone for the lifetime of the pool.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PoolExhausted` if no words remain.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::PoolExhausted);
        }

        let index = rng.random_range(0..self.words.len());
        // Order of the remaining words carries no meaning
        let word = self.words.swap_remove(index);
        debug!("drew secret, {} words remain", self.words.len());
        Ok(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Words not yet drawn, in no particular order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
