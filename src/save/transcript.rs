//! Chat transcript file
//!
//! Appends each posted chat message as one JSON line.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use crate::award::{ChatMessage, Transcript};

/// One transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Seconds since the Unix epoch
    pub posted_at: u64,
    pub speaker: String,
    pub content: String,
}

/// Transcript stored next to the world file
pub struct TranscriptFile {
    path: PathBuf,
}

impl TranscriptFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `transcript.jsonl` in the same directory as `world`
    pub fn beside(world: &Path) -> Self {
        Self::new(world.with_file_name("transcript.jsonl"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every entry
    pub fn entries(&self) -> anyhow::Result<Vec<TranscriptEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        data.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).context("parsing transcript entry"))
            .collect()
    }
}

impl Transcript for TranscriptFile {
    fn post(&mut self, message: &ChatMessage) -> anyhow::Result<()> {
        let entry = TranscriptEntry {
            posted_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            speaker: message.speaker.clone(),
            content: message.content.clone(),
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        writeln!(file, "{}", serde_json::to_string(&entry)?)?;
        Ok(())
    }
}
