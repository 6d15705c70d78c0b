//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "indic-phonetic")]
#[command(about = "Phonetic feature vectors and cross-script LCSR for Indic scripts")]
#[command(version)]
pub struct Cli {
    /// Resource directory (overrides INDIC_RESOURCES_PATH)
    #[arg(short = 'r', long, global = true)]
    pub resources: Option<PathBuf>,

    /// Load a bundle snapshot instead of the CSV resources
    #[arg(short = 's', long, global = true, conflicts_with = "resources")]
    pub snapshot: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the phonetic feature vector of a character
    Vector {
        /// Character to encode
        ch: char,

        /// Language code
        #[arg(short, long)]
        lang: String,
    },

    /// Show the structural offset of a character
    Offset {
        /// Character to inspect
        ch: char,

        /// Language code
        #[arg(short, long)]
        lang: String,
    },

    /// Compute the LCSR of two words
    Lcsr {
        /// Source word
        source: String,

        /// Target word
        target: String,

        /// Source language code
        #[arg(long)]
        slang: String,

        /// Target language code
        #[arg(long)]
        tlang: String,
    },

    /// List the phonetic property fields and their bit ranges
    Properties,

    /// Show the ID, encoding and vector of an ARPABET phoneme
    Phoneme {
        /// ARPABET symbol
        symbol: String,
    },

    /// Write the loaded resources as a snapshot
    Snapshot {
        /// Output file
        output: PathBuf,

        /// Snapshot format
        #[arg(short, long, default_value = "bincode")]
        format: SnapshotFormat,
    },
}

/// Snapshot serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    /// Bincode binary format
    Bincode,
    /// JSON format
    Json,
}

impl SnapshotFormat {
    /// Guess the format from a file extension, defaulting to bincode.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Bincode,
        }
    }
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bincode => write!(f, "bincode"),
            Self::Json => write!(f, "json"),
        }
    }
}
