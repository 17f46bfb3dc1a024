//! # Utility Functions and Helpers
//!
//! - [`ansi`]: styled stdout writer honoring `NO_COLOR` / `CLICOLOR`.
//! - [`transcript`]: `**[subject]**`-tagged history lines.

pub mod ansi;
pub mod transcript;
