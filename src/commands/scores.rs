//! Leaderboard command
//!
//! Prints the best recorded games without starting a new one.

use crate::output::print_leaderboard;
use crate::scores::ScoreLedger;
use std::io::{self, Write};

/// Print the best `limit` scores from `ledger`
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show_scores<W: Write>(out: &mut W, ledger: &ScoreLedger, limit: usize) -> io::Result<()> {
    print_leaderboard(out, &ledger.leaderboard(limit))?;
    writeln!(out, "\n{} games recorded in total", ledger.records().len())
}
