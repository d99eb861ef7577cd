//! Errors raised by the game core and its collaborators

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A draw was attempted on a pool with no words left
    #[error("word pool is exhausted")]
    PoolExhausted,

    /// The scorer was handed text that is not a valid word
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A guess was submitted after the round reached Won or Lost
    #[error("round is already finished")]
    RoundFinished,

    #[error("input closed before a valid guess was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
