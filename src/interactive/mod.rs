//! Interactive TUI front-end
//!
//! Widget-style interface built on ratatui: gallows, word, leaderboard and an input field.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
