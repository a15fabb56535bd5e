//! Colored console output
//!
//! Everything writes to a caller-supplied writer so the console mode can be driven from tests.

use super::formatters::{format_guessed, format_pattern, format_score, outcome_message};
use super::gallows::frame_text;
use crate::core::{GameSession, SessionOutcome};
use crate::scores::ScoreRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Print the leaderboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_leaderboard<W: Write>(out: &mut W, records: &[&ScoreRecord]) -> io::Result<()> {
    writeln!(out, "\n{}", "Top 10 Scores:".bright_cyan().bold())?;
    if records.is_empty() {
        writeln!(out, "   {}", "No scores yet.".bright_black())?;
    }
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "   {}", format_score(i + 1, record))?;
    }
    Ok(())
}

/// Print the gallows and the current game status
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let frame = frame_text(session.incorrect_count());
    let frame = if session.outcome() == SessionOutcome::Lost {
        frame.red()
    } else {
        frame.normal()
    };

    writeln!(out, "\n{frame}\n")?;
    writeln!(out, "Guessed letters: {}", format_guessed(session))?;
    writeln!(
        out,
        "Current word: {}",
        format_pattern(session).bright_yellow().bold()
    )?;
    writeln!(out, "Remaining attempts: {}", session.remaining_attempts())
}

/// Print the win or loss banner of a finished session
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let Some(message) = outcome_message(session) else {
        return Ok(());
    };

    let message = match session.outcome() {
        SessionOutcome::Won => message.bright_green().bold(),
        _ => message.red().bold(),
    };

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "  {message}")?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}
