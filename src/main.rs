//! Hangman - CLI
//!
//! Word-guessing game with TUI and console modes sharing one score ledger.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{Console, run_simple, show_scores},
    core::SecretWord,
    scores::{DEFAULT_SCORES_PATH, LEADERBOARD_SIZE, ScoreLedger},
    wordlists::{RandomSelector, WORDS, loader::words_from_slice},
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Score ledger file
    #[arg(short, long, global = true, default_value = DEFAULT_SCORES_PATH)]
    scores: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line prompts without TUI)
    Simple,

    /// Show the leaderboard
    Scores {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = LEADERBOARD_SIZE)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ledger = ScoreLedger::load(&cli.scores)
        .with_context(|| format!("Failed to load scores from {}", cli.scores.display()))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words_from_slice(WORDS), ledger),
        Commands::Simple => run_simple_command(&words_from_slice(WORDS), ledger),
        Commands::Scores { limit } => {
            show_scores(&mut io::stdout().lock(), &ledger, limit)?;
            Ok(())
        }
    }
}

fn run_simple_command(words: &[SecretWord], mut ledger: ScoreLedger) -> Result<()> {
    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut console =
        Console::new(io::stdin().lock(), stdout.lock()).with_clear_screen(clear_screen);

    run_simple(&mut console, words, &RandomSelector, &mut ledger)
}

fn run_play_command(words: &[SecretWord], ledger: ScoreLedger) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, RandomSelector, ledger);
    run_tui(app)
}
