//! Core domain types for Hangman
//!
//! The secret word, guess validation and the session state machine. Nothing here touches
//! the terminal or the filesystem.

mod guess;
mod session;
mod word;

pub use guess::{GuessError, GuessKind, GuessReport, parse_letter};
pub use session::{GameSession, MAX_ATTEMPTS, PLACEHOLDER, SessionOutcome};
pub use word::{SecretWord, WordError};
