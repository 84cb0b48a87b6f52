//! Subcommand modules for the `gpc` binary.

pub mod bed;
pub mod json;
pub mod overlap;
pub mod stats;
