//! CLI interface for indic-phonetic
//!
//! Inspect phonetic vectors, offsets and LCSR scores from the command line.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, SnapshotFormat};
pub use commands::{execute, load_snapshot};
