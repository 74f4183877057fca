//! Newline-delimited JSON log of replayed interactions.

use anyhow::Result;
use cubepeel_interaction::InteractionOutcome;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One line of an interaction log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionRecord {
    /// Zero-based position in the replayed script.
    pub step: usize,
    /// What the controller decided.
    pub outcome: InteractionOutcome,
}

/// Log totals, as reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub peels: usize,
    pub rotations: usize,
    pub ignored: usize,
}

impl InteractionSummary {
    pub fn record(&mut self, outcome: &InteractionOutcome) {
        match outcome {
            InteractionOutcome::Peel { .. } => self.peels += 1,
            InteractionOutcome::Rotate { .. } => self.rotations += 1,
            InteractionOutcome::Ignored { .. } => self.ignored += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.peels + self.rotations + self.ignored
    }
}

/// A sink that writes newline-delimited JSON.
pub struct JsonlSink<W: Write> {
    writer: W,
}

impl JsonlSink<BufWriter<File>> {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlSink<W> {
    /// Wrap an arbitrary writer (e.g., stdout).
    pub fn from_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
