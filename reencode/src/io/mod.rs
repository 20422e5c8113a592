//! I/O helpers for the re-encoder.

pub mod config;
pub mod rewrite;
