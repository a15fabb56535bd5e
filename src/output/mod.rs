//! Terminal output formatting
//!
//! Gallows frames, status text and colored printing shared by both front-ends.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_board, print_leaderboard, print_outcome};
pub use gallows::{drawing_frame, frame_text};
