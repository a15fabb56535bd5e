//! One round of Hangman
//!
//! `GameSession` owns the secret word, the revealed pattern, the guessed letters and the
//! incorrect-guess counter. Its only transition is [`GameSession::apply_guess`].

use super::guess::{GuessError, GuessKind, GuessReport, parse_letter};
use super::word::SecretWord;
use crate::wordlists::WordSelector;
use std::collections::BTreeSet;

/// Incorrect guesses allowed before the round is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Symbol shown for letters not yet revealed
pub const PLACEHOLDER: char = '_';

/// State of a session, derived from the pattern and the incorrect-guess counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    InProgress,
    Won,
    Lost,
}

impl SessionOutcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    revealed: Vec<Option<char>>,
    guessed: BTreeSet<char>,
    incorrect: usize,
}

impl GameSession {
    /// Start a session with a known secret word
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        let revealed = vec![None; secret.len()];
        Self {
            secret,
            revealed,
            guessed: BTreeSet::new(),
            incorrect: 0,
        }
    }

    /// Start a session with a word picked by `selector` from `words`
    ///
    /// Returns `None` if the selector picks nothing (e.g. the word list is empty).
    pub fn start<S: WordSelector + ?Sized>(words: &[SecretWord], selector: &S) -> Option<Self> {
        selector.select(words).cloned().map(Self::new)
    }

    /// Apply one guess
    ///
    /// Terminal sessions reject everything. Otherwise the input is validated, then checked
    /// against the guessed set, and only then recorded.
    ///
    /// # Errors
    /// Returns a `GuessError` and leaves the session unchanged if the input is not a single
    /// letter, the letter was already guessed, or the session is over.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, GuessKind, SecretWord, SessionOutcome};
    ///
    /// let mut session = GameSession::new(SecretWord::new("cat").unwrap());
    /// let report = session.apply_guess("c").unwrap();
    /// assert_eq!(report.kind, GuessKind::Hit);
    /// assert_eq!(report.outcome, SessionOutcome::InProgress);
    /// ```
    pub fn apply_guess(&mut self, input: &str) -> Result<GuessReport, GuessError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(GuessError::SessionOver(outcome));
        }

        let letter = parse_letter(input)?;
        if !self.guessed.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let positions = self.secret.positions_of(letter);
        for &i in positions {
            self.revealed[i] = Some(letter);
        }

        let kind = if positions.is_empty() {
            self.incorrect += 1;
            GuessKind::Miss
        } else {
            GuessKind::Hit
        };

        Ok(GuessReport {
            letter,
            kind,
            revealed: positions.len(),
            outcome: self.outcome(),
        })
    }

    /// Current outcome; a completed word wins even on the last permitted attempt
    #[must_use]
    pub fn outcome(&self) -> SessionOutcome {
        if self.is_solved() {
            SessionOutcome::Won
        } else if self.incorrect >= MAX_ATTEMPTS {
            SessionOutcome::Lost
        } else {
            SessionOutcome::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Revealed pattern with `PLACEHOLDER` for hidden positions
    #[must_use]
    pub fn revealed_pattern(&self) -> Vec<char> {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Letters guessed so far, in sorted order
    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.incorrect)
    }

    /// Number of accepted guesses, hits and misses alike
    #[inline]
    #[must_use]
    pub fn guesses_taken(&self) -> usize {
        self.guessed.len()
    }

    /// Turn count recorded on the leaderboard: the number of incorrect guesses
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.incorrect
    }
}
