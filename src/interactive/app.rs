//! TUI application state and logic

use crate::core::{GameSession, SecretWord, SessionOutcome};
use crate::output::formatters::{guess_feedback, outcome_message};
use crate::scores::{ScoreLedger, ScoreRecord};
use crate::wordlists::WordSelector;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: WordSelector> {
    pub words: &'a [SecretWord],
    pub selector: S,
    pub ledger: ScoreLedger,
    pub session: Option<GameSession>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Start screen, waiting for the start control
    Welcome,
    /// Round in progress, the input field takes one letter
    Guess,
    /// Round finished, the input field takes the player's name
    NameEntry,
    /// Score saved, waiting for restart or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a, S: WordSelector> App<'a, S> {
    #[must_use]
    pub fn new(words: &'a [SecretWord], selector: S, ledger: ScoreLedger) -> Self {
        Self {
            words,
            selector,
            ledger,
            session: None,
            input_mode: InputMode::Welcome,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Hangman! Press 'n' to start a new game.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start (or restart) a round with a freshly selected word
    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        match GameSession::start(self.words, &self.selector) {
            Some(session) => {
                let len = session.secret().len();
                self.session = Some(session);
                self.input_mode = InputMode::Guess;
                self.add_message(
                    &format!("New game! The word has {len} letters."),
                    MessageStyle::Info,
                );
            }
            None => {
                self.session = None;
                self.input_mode = InputMode::Welcome;
                self.add_message("No words available to play!", MessageStyle::Error);
            }
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let (text, style) = match session.apply_guess(input.trim()) {
            Ok(report) => {
                let style = if report.is_hit() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                (guess_feedback(&report, session), style)
            }
            Err(err) => (Some(err.to_string()), MessageStyle::Error),
        };

        if let Some(text) = text {
            self.add_message(&text, style);
        }

        self.check_finished();
    }

    fn check_finished(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let outcome = session.outcome();
        if !outcome.is_over() {
            return;
        }

        let message = outcome_message(session);
        self.stats.total_games += 1;
        if outcome == SessionOutcome::Won {
            self.stats.games_won += 1;
        }

        let style = if outcome == SessionOutcome::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        if let Some(message) = message {
            self.add_message(&message, style);
        }
        self.add_message("Enter your name for the leaderboard.", MessageStyle::Info);
        self.input_mode = InputMode::NameEntry;
    }

    /// Record the finished round under the name in the input buffer
    ///
    /// Empty names are not submitted.
    pub fn submit_name(&mut self) {
        let name = self.input_buffer.trim().to_string();
        if name.is_empty() {
            self.add_message("Please enter a name.", MessageStyle::Error);
            return;
        }
        let Some(score) = self.session.as_ref().map(GameSession::score) else {
            return;
        };

        self.input_buffer.clear();
        match self.ledger.record(ScoreRecord::new(name, score)) {
            Ok(()) => self.add_message("Score saved!", MessageStyle::Success),
            Err(err) => self.add_message(
                &format!("Failed to save score: {err}"),
                MessageStyle::Error,
            ),
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Welcome | InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    // The field holds a single letter; typing replaces it
                    self.input_buffer.clear();
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::NameEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_name(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails.
pub fn run_tui<S: WordSelector>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSelector>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
