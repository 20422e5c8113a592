//! Line-oriented output for a pass.
//!
//! Each outcome maps to one or two lines, tagged with the stream they belong on:
//! progress and success on stdout, `not found` and `error` on stderr. A final
//! completion line follows the last path.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::outcome::{FileOutcome, PassReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub stream: Stream,
    pub text: String,
}

impl Line {
    fn out(text: String) -> Self {
        Self {
            stream: Stream::Stdout,
            text,
        }
    }

    fn err(text: String) -> Self {
        Self {
            stream: Stream::Stderr,
            text,
        }
    }
}

#[derive(Serialize)]
struct JsonOut<'a, T: Serialize> {
    ok: bool,
    data: &'a T,
}

pub fn outcome_lines(outcome: &FileOutcome) -> Vec<Line> {
    match outcome {
        FileOutcome::Fixed { path, .. } => vec![
            Line::out(format!("fixing {}", path.display())),
            Line::out(format!("fixed {}", path.display())),
        ],
        FileOutcome::NotFound { path } => {
            vec![Line::err(format!("{} not found", path.display()))]
        }
        FileOutcome::Failed { path, reason } => vec![
            Line::out(format!("fixing {}", path.display())),
            Line::err(format!("error: {}: {}", path.display(), reason)),
        ],
    }
}

pub fn completion_line(report: &PassReport) -> Line {
    Line::out(format!(
        "encoding fix complete: {} fixed, {} not found, {} failed",
        report.fixed, report.not_found, report.failed
    ))
}

/// All lines for a finished pass, in output order.
pub fn report_lines(report: &PassReport) -> Vec<Line> {
    let mut lines: Vec<Line> = report.outcomes.iter().flat_map(outcome_lines).collect();
    lines.push(completion_line(report));
    lines
}

/// Print lines to their streams.
pub fn emit(lines: &[Line]) {
    for line in lines {
        match line.stream {
            Stream::Stdout => println!("{}", line.text),
            Stream::Stderr => eprintln!("{}", line.text),
        }
    }
}

/// Pretty JSON envelope `{"ok": true, "data": <report>}`.
pub fn render_json(report: &PassReport) -> Result<String> {
    serde_json::to_string_pretty(&JsonOut {
        ok: true,
        data: report,
    })
    .context("serialize report json")
}
