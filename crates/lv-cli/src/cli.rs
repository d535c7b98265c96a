//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lv_core::EventKind;

/// Device activity log viewer.
///
/// Merges location, text input, notification and connectivity logs into one
/// timeline and reconstructs what was typed.
#[derive(Debug, Parser)]
#[command(name = "lv", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every event in chronological order.
    Timeline {
        /// Log files. The first is loaded, the rest are appended to it.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Only show events of this kind.
        #[arg(long)]
        kind: Option<EventKind>,

        /// Output as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Pair location fixes with the nearest connectivity sample.
    Correlate {
        /// Log files. The first is loaded, the rest are appended to it.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Only show the location at this index (0-based).
        #[arg(long, conflicts_with = "at")]
        location: Option<usize>,

        /// Only show the first location taken at this timestamp (ms).
        #[arg(long)]
        at: Option<i64>,

        /// Output as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Show typing sessions grouped by application, with their edits.
    Texts {
        /// Log files. The first is loaded, the rest are appended to it.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show notifications, most recent first.
    Notifications {
        /// Log files. The first is loaded, the rest are appended to it.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON lines.
        #[arg(long)]
        json: bool,
    },
}
