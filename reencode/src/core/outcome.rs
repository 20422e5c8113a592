//! Per-file outcomes and the report collected over one pass.
//!
//! Outcomes are recorded in the order paths were processed. Rendering them is
//! left to [`crate::report`].

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to a single path during the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was read as UTF-8 and written back.
    Fixed { path: PathBuf, bytes: usize },
    /// Nothing exists at the path; it was skipped and not created.
    NotFound { path: PathBuf },
    /// Reading, decoding or writing failed; the file was skipped.
    Failed { path: PathBuf, reason: String },
}

impl FileOutcome {
    /// Path as it appeared in the input list.
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Fixed { path, .. }
            | FileOutcome::NotFound { path }
            | FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Ordered outcomes of a pass plus per-kind counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub outcomes: Vec<FileOutcome>,
    pub fixed: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl PassReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Fixed { .. } => self.fixed += 1,
            FileOutcome::NotFound { .. } => self.not_found += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
