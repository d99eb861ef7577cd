//! Interactive full-screen game
//!
//! Event-driven front end: key presses feed [`Round::submit`](crate::round::Round::submit)
//! directly instead of going through a blocking guess source.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
