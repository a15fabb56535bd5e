//! Guess input validation and evaluation results

use super::session::SessionOutcome;
use std::fmt;

/// Why a guess was rejected
///
/// All variants are recoverable: the session is left untouched and the caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Input was not exactly one alphabetic character
    InvalidInput,
    /// The letter was already submitted this session
    AlreadyGuessed(char),
    /// The session already reached a terminal outcome
    SessionOver(SessionOutcome),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Please enter a valid letter."),
            Self::AlreadyGuessed(_) => write!(f, "You've already guessed that letter!"),
            Self::SessionOver(_) => write!(f, "This game is over. Start a new one!"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Whether an accepted guess matched the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKind {
    Hit,
    Miss,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    /// The normalized (lowercase) letter
    pub letter: char,
    pub kind: GuessKind,
    /// Number of positions this guess revealed (0 on a miss)
    pub revealed: usize,
    /// Session outcome after applying the guess
    pub outcome: SessionOutcome,
}

impl GuessReport {
    #[inline]
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self.kind, GuessKind::Hit)
    }
}

/// Normalize raw input into a single lowercase letter
///
/// # Errors
/// Returns `GuessError::InvalidInput` unless the input is exactly one alphabetic character
/// whose lowercase form is itself a single character.
///
/// # Examples
/// ```
/// use hangman::core::{parse_letter, GuessError};
///
/// assert_eq!(parse_letter("Q"), Ok('q'));
/// assert_eq!(parse_letter("ab"), Err(GuessError::InvalidInput));
/// ```
pub fn parse_letter(input: &str) -> Result<char, GuessError> {
    let mut chars = input.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(GuessError::InvalidInput);
    };

    if !ch.is_alphabetic() {
        return Err(GuessError::InvalidInput);
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(GuessError::InvalidInput),
    }
}
