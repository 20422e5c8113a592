//! Rewrite a configured list of text files as canonical UTF-8.
//!
//! The crate keeps decisions and side effects apart:
//!
//! - **[`core`]**: Pure logic (UTF-8 decoding rules, per-file outcomes, pass report).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Filesystem access (config file, in-place file rewrite).
//!
//! [`pass`] runs the re-encoding pass over a path list and [`report`] turns its
//! outcomes into the line-oriented output printed by the `reencode` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod pass;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
