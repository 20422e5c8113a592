//! The re-encoding pass.
//!
//! Paths are handled one at a time, in list order. Each path ends in exactly one
//! [`FileOutcome`]; a missing file or a failed rewrite never stops the pass.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::outcome::{FileOutcome, PassReport};
use crate::io::config::ReencodeConfig;
use crate::io::rewrite::rewrite_utf8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOptions {
    /// Drop a leading UTF-8 byte-order mark when rewriting.
    pub strip_bom: bool,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self { strip_bom: true }
    }
}

impl From<&ReencodeConfig> for PassOptions {
    fn from(cfg: &ReencodeConfig) -> Self {
        Self {
            strip_bom: cfg.strip_bom,
        }
    }
}

/// Run the pass over `paths`, resolving relative paths against `root`.
pub fn fix_encoding(root: &Path, paths: &[PathBuf], options: &PassOptions) -> PassReport {
    fix_encoding_with(root, paths, options, |_| {})
}

/// Like [`fix_encoding`], calling `observe` with each outcome as soon as it is known.
///
/// `observe` runs before the next path is touched, so streamed output follows
/// list order.
pub fn fix_encoding_with<F>(
    root: &Path,
    paths: &[PathBuf],
    options: &PassOptions,
    mut observe: F,
) -> PassReport
where
    F: FnMut(&FileOutcome),
{
    info!(root = %root.display(), paths = paths.len(), "starting encoding pass");
    let mut report = PassReport::default();
    for path in paths {
        let outcome = fix_one(root, path, options);
        observe(&outcome);
        report.push(outcome);
    }
    info!(
        fixed = report.fixed,
        not_found = report.not_found,
        failed = report.failed,
        "encoding pass finished"
    );
    report
}

fn fix_one(root: &Path, path: &Path, options: &PassOptions) -> FileOutcome {
    let target = root.join(path);
    if !target.exists() {
        debug!(path = %target.display(), "skipping missing path");
        return FileOutcome::NotFound {
            path: path.to_path_buf(),
        };
    }
    debug!(path = %target.display(), strip_bom = options.strip_bom, "rewriting");
    match rewrite_utf8(&target, options.strip_bom) {
        Ok(bytes) => FileOutcome::Fixed {
            path: path.to_path_buf(),
            bytes,
        },
        Err(err) => {
            debug!(path = %target.display(), error = %format!("{err:#}"), "rewrite failed");
            FileOutcome::Failed {
                path: path.to_path_buf(),
                reason: format!("{err:#}"),
            }
        }
    }
}
