//! Flat-file score ledger
//!
//! Scores are stored as headerless CSV rows of `name,turns`. The whole file is read on load
//! and rewritten on save; only one process is expected to use it at a time.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Number of records shown on the leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// Default ledger location, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "scores.csv";

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub turns: usize,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, turns: usize) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }
}

/// All recorded scores, in the order they were added
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
    records: Vec<ScoreRecord>,
}

impl ScoreLedger {
    /// Create an empty ledger backed by `path` without touching the filesystem
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Load the ledger stored at `path`
    ///
    /// A missing file yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or contains malformed rows.
    pub fn load(path: impl Into<PathBuf>) -> csv::Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::new(path));
        }

        let records = read_records(File::open(&path)?)?;
        Ok(Self { path, records })
    }

    /// Rewrite the backing file with every record
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_all(&self) -> csv::Result<()> {
        write_records(File::create(&self.path)?, &self.records)
    }

    pub fn append(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    /// Append a record and persist the full ledger
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails. The record stays in memory either way.
    pub fn record(&mut self, record: ScoreRecord) -> csv::Result<()> {
        self.append(record);
        self.save_all()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in insertion order (the order they are persisted in)
    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// The best `limit` records, fewest turns first
    ///
    /// Ties keep their insertion order.
    #[must_use]
    pub fn leaderboard(&self, limit: usize) -> Vec<&ScoreRecord> {
        let mut sorted: Vec<&ScoreRecord> = self.records.iter().collect();
        sorted.sort_by_key(|record| record.turns);
        sorted.truncate(limit);
        sorted
    }

    /// The leaderboard at its default size
    #[must_use]
    pub fn top_scores(&self) -> Vec<&ScoreRecord> {
        self.leaderboard(LEADERBOARD_SIZE)
    }
}

/// Parse headerless `name,turns` rows
///
/// Fields are taken verbatim, so names keep any surrounding spaces.
///
/// # Errors
///
/// Returns an error on I/O failure or a row that is not a name followed by a turn count.
pub fn read_records<R: Read>(reader: R) -> csv::Result<Vec<ScoreRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    reader.deserialize().collect()
}

/// Write records as headerless `name,turns` rows, each ended by CRLF
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_records<W: Write>(writer: W, records: &[ScoreRecord]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-ledger-{}-{name}.csv", std::process::id()))
    }

    fn sample() -> Vec<ScoreRecord> {
        vec![
            ScoreRecord::new("ada", 3),
            ScoreRecord::new("grace", 1),
            ScoreRecord::new("linus", 3),
            ScoreRecord::new("ken", 0),
        ]
    }

    #[test]
    fn read_plain_rows() {
        let records = read_records("ada,3\ngrace,1\n".as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![ScoreRecord::new("ada", 3), ScoreRecord::new("grace", 1)]
        );
    }

    #[test]
    fn read_crlf_rows() {
        let records = read_records("ada,3\r\ngrace,1\r\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].turns, 1);
    }

    #[test]
    fn read_empty_input() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn read_rejects_bad_turns() {
        assert!(read_records("ada,three\n".as_bytes()).is_err());
    }

    #[test]
    fn write_quotes_names_with_commas() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[ScoreRecord::new("Hopper, Grace", 2)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\"Hopper, Grace\",2"));

        let records = read_records(text.as_bytes()).unwrap();
        assert_eq!(records[0].name, "Hopper, Grace");
    }

    #[test]
    fn write_then_read_is_stable() {
        let mut first = Vec::new();
        write_records(&mut first, &sample()).unwrap();

        let records = read_records(first.as_slice()).unwrap();
        assert_eq!(records, sample());

        let mut second = Vec::new();
        write_records(&mut second, &records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn leaderboard_sorted_stable() {
        let mut ledger = ScoreLedger::new(temp_path("unused"));
        for record in sample() {
            ledger.append(record);
        }

        let names: Vec<&str> = ledger
            .top_scores()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["ken", "grace", "ada", "linus"]);

        // Sorting for display does not reorder storage
        assert_eq!(ledger.records(), sample().as_slice());
    }

    #[test]
    fn leaderboard_truncates() {
        let mut ledger = ScoreLedger::new(temp_path("unused"));
        for turns in (0..15).rev() {
            ledger.append(ScoreRecord::new(format!("p{turns}"), turns));
        }

        let top = ledger.top_scores();
        assert_eq!(top.len(), LEADERBOARD_SIZE);
        assert_eq!(top[0].turns, 0);
        assert_eq!(top[9].turns, 9);
        assert_eq!(ledger.records().len(), 15);
        assert_eq!(ledger.leaderboard(3).len(), 3);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let ledger = ScoreLedger::load(temp_path("missing")).unwrap();
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn record_persists_full_set() {
        let path = temp_path("record");
        let _ = fs::remove_file(&path);

        let mut ledger = ScoreLedger::load(&path).unwrap();
        for record in sample() {
            ledger.record(record).unwrap();
        }

        let reloaded = ScoreLedger::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(reloaded.records(), sample().as_slice());
    }

    #[test]
    fn read_keeps_surrounding_spaces() {
        let records = read_records("\" Bob \",1\r\n ada ,2\r\n".as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![ScoreRecord::new(" Bob ", 1), ScoreRecord::new(" ada ", 2)]
        );
    }

    #[test]
    fn write_ends_rows_with_crlf() {
        let mut buf = Vec::new();
        let records = [ScoreRecord::new("ada", 3), ScoreRecord::new("ken", 0)];
        write_records(&mut buf, &records).unwrap();
        assert_eq!(buf, b"ada,3\r\nken,0\r\n");
    }

    #[test]
    fn save_of_load_keeps_padded_names() {
        let path = temp_path("padded");
        fs::write(&path, "ada,3\r\n Bob ,1\r\n").unwrap();

        ScoreLedger::load(&path).unwrap().save_all().unwrap();
        let after = fs::read_to_string(&path).unwrap();
        let reloaded = ScoreLedger::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(after, "ada,3\r\n Bob ,1\r\n");
        assert_eq!(reloaded.records()[1].name, " Bob ");
    }

    #[test]
    fn save_of_load_is_noop() {
        let path = temp_path("noop");
        fs::write(&path, "ada,3\r\n\"Hopper, Grace\",1\r\nken,0\r\n").unwrap();
        let before = fs::read(&path).unwrap();

        ScoreLedger::load(&path).unwrap().save_all().unwrap();
        let after = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(before, after);
    }
}
