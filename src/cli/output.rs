//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordkinArgs};
use crate::error::Result;

/// Result structure for the component command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentResult {
    pub word: String,
    pub component_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    pub duration_ms: u64,
}

/// Result structure for the neighbors command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NeighborsResult {
    pub word: String,
    pub max_distance: usize,
    pub neighbors: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub left: String,
    pub right: String,
    pub distance: usize,
}

/// Dictionary and index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub dictionary_path: String,
    pub word_count: usize,
    pub node_count: usize,
}

/// Human-readable rendering for a command result.
pub trait HumanReport {
    /// Print the result for a terminal reader, honoring verbosity.
    fn report(&self, args: &WordkinArgs);
}

impl HumanReport for ComponentResult {
    fn report(&self, args: &WordkinArgs) {
        if args.verbosity() == 0 {
            println!("{}", self.component_size);
            return;
        }
        println!(
            "{} word(s) connected to {:?}",
            self.component_size, self.word
        );
        if let Some(members) = &self.members {
            for member in members {
                println!("  {member}");
            }
        }
        if args.verbosity() > 1 {
            println!("({} ms)", self.duration_ms);
        }
    }
}

impl HumanReport for NeighborsResult {
    fn report(&self, args: &WordkinArgs) {
        if args.verbosity() > 0 {
            println!(
                "{} neighbor(s) of {:?} within distance {}",
                self.neighbors.len(),
                self.word,
                self.max_distance
            );
        }
        for neighbor in &self.neighbors {
            println!("{neighbor}");
        }
        if args.verbosity() > 1 {
            println!("({} ms)", self.duration_ms);
        }
    }
}

impl HumanReport for DistanceResult {
    fn report(&self, args: &WordkinArgs) {
        if args.verbosity() == 0 {
            println!("{}", self.distance);
        } else {
            println!(
                "distance between {:?} and {:?}: {}",
                self.left, self.right, self.distance
            );
        }
    }
}

impl HumanReport for StatsResult {
    fn report(&self, args: &WordkinArgs) {
        if args.verbosity() > 0 {
            println!("Dictionary: {}", self.dictionary_path);
        }
        println!("words: {}", self.word_count);
        println!("trie nodes: {}", self.node_count);
    }
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize + HumanReport>(result: &T, args: &WordkinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.report(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordkinArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}
