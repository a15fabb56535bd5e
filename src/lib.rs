//! Hangman
//!
//! A word-guessing game with a terminal UI, a plain console mode and a CSV score ledger.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, SecretWord, SessionOutcome};
//!
//! let mut session = GameSession::new(SecretWord::new("cat").unwrap());
//! for letter in ["c", "a", "t"] {
//!     session.apply_guess(letter).unwrap();
//! }
//! assert_eq!(session.outcome(), SessionOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Word lists and secret word selection
pub mod wordlists;

// Score ledger
pub mod scores;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
