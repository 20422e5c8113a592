//! Stable exit codes for the `reencode` binary.

/// The pass ran to completion. Per-file failures do not change this.
pub const OK: i32 = 0;
/// The pass could not start (invalid config, unreadable config file, bad arguments).
pub const INVALID: i32 = 1;
