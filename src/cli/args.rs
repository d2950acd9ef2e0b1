//! Command line argument parsing for the wordkin CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// wordkin - explore edit-distance neighborhoods in a word dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "wordkin")]
#[command(about = "Explore edit-distance neighborhoods in a word dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordkinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordkinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count the words connected to a start word by single-edit chains
    Component(ComponentArgs),

    /// List the stored words within an edit-distance threshold of a word
    Neighbors(NeighborsArgs),

    /// Compute the edit distance between two words
    Distance(DistanceArgs),

    /// Show dictionary and index statistics
    Stats(StatsArgs),
}

/// Arguments for the component command
#[derive(Parser, Debug, Clone)]
pub struct ComponentArgs {
    /// Path to a whitespace-delimited dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word whose component is measured
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Also list the member words
    #[arg(short, long)]
    pub members: bool,
}

/// Arguments for the neighbors command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Path to a whitespace-delimited dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Query word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance
    #[arg(short = 'd', long, default_value = "1")]
    pub max_distance: usize,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second word
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to a whitespace-delimited dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
