use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-file result of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Content changed and was (or would be, on a dry run) written back.
    Fixed,
    /// Nothing matched, or every patch was already applied.
    Skipped,
    /// The file could not be read, transformed, or written.
    Errored,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    // Human-readable descriptions of applied changes (or the error)
    pub notes: Vec<String>,
}

impl FileReport {
    pub fn new(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            path,
            outcome,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Aggregate counters for one batch run, built incrementally and
/// printed once at the end.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    pub fixed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn record(&mut self, report: FileReport) {
        self.processed += 1;
        match report.outcome {
            Outcome::Fixed => self.fixed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Errored => self.errored += 1,
        }
        self.files.push(report);
    }

    pub fn files_with(&self, outcome: Outcome) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(move |f| f.outcome == outcome)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} processed, {} fixed, {} skipped, {} errored",
            self.processed, self.fixed, self.skipped, self.errored
        )
    }
}
