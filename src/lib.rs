//! `gpc` normalizes the outputs of gene callers into a common interval
//! representation and compares the predicted regions across tools.

pub mod libs;

pub use crate::libs::io::{reader, writer};
