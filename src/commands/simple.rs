//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one prompt per guess, name entry after each round.

use crate::core::{GameSession, SecretWord};
use crate::output::formatters::{format_pattern, guess_feedback, guess_prompt};
use crate::output::{print_board, print_leaderboard, print_outcome};
use crate::scores::{ScoreLedger, ScoreRecord};
use crate::wordlists::WordSelector;
use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Line-oriented terminal: prompts on `output`, reads answers from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the screen before drawing each turn
    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `None` once the input is exhausted.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Run the simple interactive CLI mode
///
/// Plays rounds until the player declines another game or input runs out. Every finished
/// round is appended to `ledger` and saved.
///
/// # Errors
///
/// Returns an error on terminal I/O failure, if `selector` cannot pick a word from `words`,
/// or if the ledger cannot be saved.
pub fn run_simple<S, R, W>(
    console: &mut Console<R, W>,
    words: &[SecretWord],
    selector: &S,
    ledger: &mut ScoreLedger,
) -> Result<()>
where
    S: WordSelector + ?Sized,
    R: BufRead,
    W: Write,
{
    print_leaderboard(&mut console.output, &ledger.top_scores())?;

    loop {
        let session = GameSession::start(words, selector).context("No word available to play")?;

        let Some(session) = play_round(console, session)? else {
            return say_goodbye(console);
        };

        let Some(name) = console.prompt("\nEnter your name")? else {
            return say_goodbye(console);
        };

        ledger
            .record(ScoreRecord::new(name, session.score()))
            .with_context(|| format!("Failed to save scores to {}", ledger.path().display()))?;

        print_leaderboard(&mut console.output, &ledger.top_scores())?;

        match console
            .prompt("\nDo you want to play again? (y/n)")?
            .map(|answer| answer.to_lowercase())
            .as_deref()
        {
            Some("y") => {}
            _ => return say_goodbye(console),
        }
    }
}

/// Play one round to completion
///
/// Returns the finished session, or `None` if input ran out first.
fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut session: GameSession,
) -> io::Result<Option<GameSession>> {
    writeln!(console.output, "\n{}", "Welcome to Hangman!".bright_cyan().bold())?;
    writeln!(
        console.output,
        "The word has {} letters: {}",
        session.secret().len(),
        format_pattern(&session)
    )?;

    let mut feedback: Option<String> = None;

    while !session.is_over() {
        console.clear()?;
        if let Some(message) = feedback.take() {
            writeln!(console.output, "{message}")?;
        }
        print_board(&mut console.output, &session)?;

        let Some(input) = console.prompt(&guess_prompt(&session))? else {
            return Ok(None);
        };

        feedback = match session.apply_guess(&input) {
            Ok(report) => guess_feedback(&report, &session).map(|text| {
                if report.is_hit() {
                    text.green().to_string()
                } else {
                    text.yellow().to_string()
                }
            }),
            Err(err) => Some(err.to_string().red().to_string()),
        };
    }

    console.clear()?;
    print_board(&mut console.output, &session)?;
    print_outcome(&mut console.output, &session)?;

    Ok(Some(session))
}

fn say_goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console.output, "\nThank you for playing! Goodbye.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FixedSelector;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-simple-{}-{name}.csv", std::process::id()))
    }

    fn play(script: &str, ledger: &mut ScoreLedger) -> String {
        colored::control::set_override(false);
        let words = words_from_slice(&["cat", "python"]);
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

        run_simple(&mut console, &words, &FixedSelector::new("cat"), ledger).unwrap();

        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn winning_round_is_recorded() {
        let path = temp_path("win");
        let _ = fs::remove_file(&path);
        let mut ledger = ScoreLedger::load(&path).unwrap();

        let text = play("c\nx\na\nt\nada\nn\n", &mut ledger);

        assert!(text.contains("The word has 3 letters: _ _ _"));
        assert!(text.contains("Good guess! The word is now: c _ _"));
        assert!(text.contains("No 'x' in the word."));
        assert!(text.contains("Congratulations! You've guessed the word: cat in 1 turns!"));
        assert!(text.contains("1. ada - 1 turns"));
        assert!(text.contains("Thank you for playing! Goodbye."));
        assert_eq!(ledger.records(), &[ScoreRecord::new("ada", 1)]);

        let reloaded = ScoreLedger::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(reloaded.records(), ledger.records());
    }

    #[test]
    fn losing_round_records_max_attempts() {
        let path = temp_path("lose");
        let _ = fs::remove_file(&path);
        let mut ledger = ScoreLedger::load(&path).unwrap();

        let text = play("b\nd\ne\nf\ng\nh\ni\nj\nk\nl\nken\nn\n", &mut ledger);
        let _ = fs::remove_file(&path);

        assert!(text.contains("You've run out of attempts! The word was: cat"));
        assert!(text.contains("Attempt 10/10. Guess a letter"));
        assert_eq!(ledger.records(), &[ScoreRecord::new("ken", 10)]);
    }

    #[test]
    fn invalid_and_repeated_guesses_reprompt() {
        let mut ledger = ScoreLedger::new(temp_path("unused"));
        let text = play("5\nab\nc\nc\n", &mut ledger);

        assert!(text.contains("Please enter a valid letter."));
        assert!(text.contains("You've already guessed that letter!"));
        assert!(text.contains("Remaining attempts: 10"));
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn play_again_starts_new_round() {
        let path = temp_path("again");
        let _ = fs::remove_file(&path);
        let mut ledger = ScoreLedger::load(&path).unwrap();

        let text = play("c\na\nt\nada\ny\nt\na\nc\ngrace\nN\n", &mut ledger);
        let _ = fs::remove_file(&path);

        assert_eq!(text.matches("Welcome to Hangman!").count(), 2);
        assert_eq!(ledger.records().len(), 2);
        assert_eq!(ledger.records()[1].name, "grace");
    }

    #[test]
    fn exhausted_input_ends_quietly() {
        let mut ledger = ScoreLedger::new(temp_path("unused"));
        let text = play("", &mut ledger);

        assert!(text.contains("No scores yet."));
        assert!(text.contains("Thank you for playing! Goodbye."));
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn missing_word_is_an_error() {
        let mut ledger = ScoreLedger::new(temp_path("unused"));
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());

        let result = run_simple(&mut console, &[], &FixedSelector::new("cat"), &mut ledger);
        assert!(result.is_err());
    }
}
