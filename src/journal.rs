//! File-backed mood journal.
//!
//! Records live one JSON object per line so appends never rewrite history.
//! The simulator only ever consumes the most recent record, as the initial
//! condition of a run; everything else here exists for the surrounding
//! journaling surface.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::{MOOD_MAX, MOOD_MIN};
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

/// One self-reported check-in. All scales run 0-10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub timestamp: DateTime<Utc>,
    pub time_of_day: TimeOfDay,
    pub mood: u8,
    pub energy: u8,
    pub sleep: u8,
    pub irritability: u8,
    pub confidence: u8,
    pub impulsivity: u8,
    #[serde(default)]
    pub notes: String,
}

impl MoodEntry {
    /// Logged mood rescaled to the simulator's 0-100 scale.
    pub fn initial_mood(&self) -> f64 {
        (f64::from(self.mood) * 10.0).clamp(MOOD_MIN, MOOD_MAX)
    }
}

/// Append-only JSONL store of [`MoodEntry`] records.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one record. Creates the file on first write.
    pub fn append(&self, entry: &MoodEntry) -> Result<(), Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(entry)?;
        writeln!(file, "{line}")?;
        debug!("journal append: mood={} at {}", entry.mood, entry.timestamp);
        Ok(())
    }

    /// All records in write order. A missing file is an empty journal; a
    /// malformed line is a hard decode error.
    pub fn load(&self) -> Result<Vec<MoodEntry>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }

    /// The most recent record, if any. When this is `None`, callers supply
    /// `DEFAULT_INITIAL_MOOD` themselves; no default is invented here.
    pub fn last(&self) -> Result<Option<MoodEntry>, Error> {
        Ok(self.load()?.pop())
    }
}
