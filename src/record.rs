//! Match results, written as pretty-printed JSON once a game ends.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: String,
    pub loser: String,
    /// Serialized as an ISO-8601 calendar date, e.g. `2024-03-01`.
    pub date: NaiveDate,
}

impl MatchRecord {
    pub fn new(winner: impl Into<String>, loser: impl Into<String>, date: NaiveDate) -> Self {
        MatchRecord {
            winner: winner.into(),
            loser: loser.into(),
            date,
        }
    }

    /// A record dated with the local calendar day.
    pub fn today(winner: impl Into<String>, loser: impl Into<String>) -> Self {
        Self::new(winner, loser, chrono::Local::now().date_naive())
    }

    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record to `path`, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} beat {} on {}", self.winner, self.loser, self.date)
    }
}
