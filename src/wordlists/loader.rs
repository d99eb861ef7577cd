//! Word list loading utilities
//!
//! Sources only hand back raw lines; deciding which lines are usable words
//! is the pool's job.

use std::fs;
use std::io;
use std::path::Path;

/// Read every line of a word list file
///
/// Lines are returned as-is apart from the line terminator.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::pool::WordPool;
/// use wordle_game::wordlists::loader::read_lines;
///
/// let pool = WordPool::load(read_lines("data/words.txt").unwrap());
/// println!("Loaded {} words", pool.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}
