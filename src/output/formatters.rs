//! Formatting utilities shared by the console and the TUI

use crate::core::{GameSession, GuessKind, GuessReport, MAX_ATTEMPTS, SessionOutcome};
use crate::scores::ScoreRecord;

/// Join characters with single spaces, e.g. `_ a _`
fn spaced(chars: impl IntoIterator<Item = char>) -> String {
    chars
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Revealed pattern joined by spaces
#[must_use]
pub fn format_pattern(session: &GameSession) -> String {
    spaced(session.revealed_pattern())
}

/// Guessed letters in sorted order, joined by spaces
#[must_use]
pub fn format_guessed(session: &GameSession) -> String {
    spaced(session.guessed_letters().iter().copied())
}

/// Prompt for the next guess, numbered by incorrect guesses so far
#[must_use]
pub fn guess_prompt(session: &GameSession) -> String {
    format!(
        "Attempt {}/{MAX_ATTEMPTS}. Guess a letter",
        session.incorrect_count() + 1
    )
}

/// Feedback for an accepted guess, if any is worth showing
#[must_use]
pub fn guess_feedback(report: &GuessReport, session: &GameSession) -> Option<String> {
    match report.kind {
        GuessKind::Hit if report.outcome == SessionOutcome::InProgress => Some(format!(
            "Good guess! The word is now: {}",
            format_pattern(session)
        )),
        GuessKind::Hit => None,
        GuessKind::Miss => Some(format!("No '{}' in the word.", report.letter)),
    }
}

/// Closing message for a finished session
#[must_use]
pub fn outcome_message(session: &GameSession) -> Option<String> {
    match session.outcome() {
        SessionOutcome::InProgress => None,
        SessionOutcome::Won => Some(format!(
            "Congratulations! You've guessed the word: {} in {} turns!",
            session.secret(),
            session.score()
        )),
        SessionOutcome::Lost => Some(format!(
            "You've run out of attempts! The word was: {}",
            session.secret()
        )),
    }
}

/// One leaderboard line, ranks starting at 1
#[must_use]
pub fn format_score(rank: usize, record: &ScoreRecord) -> String {
    format!("{rank}. {} - {} turns", record.name, record.turns)
}
