//! Word lists for secret selection
//!
//! Provides the embedded default list and a loader for custom list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::pool::WordPool;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_words() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not 5 letters");
        }
    }

    #[test]
    fn embedded_list_loads_fully_into_pool() {
        assert_eq!(WordPool::load(WORDS).len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_is_not_trivially_small() {
        assert!(WORDS_COUNT >= 100, "Expected a usable default list");
    }
}
