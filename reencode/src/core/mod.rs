//! Pure logic: no filesystem access, no printing.

pub mod outcome;
pub mod text;
