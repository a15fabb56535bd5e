//! Score persistence
//!
//! The leaderboard ledger shared by both front-ends.

pub mod ledger;

pub use ledger::{DEFAULT_SCORES_PATH, LEADERBOARD_SIZE, ScoreLedger, ScoreRecord};
