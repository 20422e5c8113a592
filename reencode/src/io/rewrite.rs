//! In-place UTF-8 rewrite of a single file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::text::decode_utf8;

/// Read `path`, decode it as UTF-8 and write the text back to the same path.
///
/// Returns the number of bytes written. Nothing is written when reading or
/// decoding fails. Error contexts name the failed stage only; callers already
/// know the path.
pub fn rewrite_utf8(path: &Path, strip_bom: bool) -> Result<usize> {
    let bytes = fs::read(path).context("read")?;
    let text = decode_utf8(bytes, strip_bom).context("decode as utf-8")?;
    fs::write(path, text.as_bytes()).context("write")?;
    Ok(text.len())
}
