//! Command implementations for the wordkin CLI.

use std::path::Path;
use std::time::Instant;

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::component::{component_members, component_size};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::levenshtein::levenshtein_distance;
use crate::neighbors::NeighborSearcher;
use crate::trie::WordTrie;

/// Execute a CLI command.
pub fn execute_command(args: WordkinArgs) -> Result<()> {
    match &args.command {
        Command::Component(component_args) => run_component(component_args.clone(), &args),
        Command::Neighbors(neighbors_args) => run_neighbors(neighbors_args.clone(), &args),
        Command::Distance(distance_args) => run_distance(distance_args.clone(), &args),
        Command::Stats(stats_args) => run_stats(stats_args.clone(), &args),
    }
}

/// Load a dictionary file and build the trie index.
fn load_trie(path: &Path, cli_args: &WordkinArgs) -> Result<WordTrie> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", path.display());
    }
    let dictionary = Dictionary::load_from_file(path)?;
    debug!("loaded {} words from {}", dictionary.word_count(), path.display());
    Ok(dictionary.build_trie())
}

/// Measure the connected component of a word.
fn run_component(args: ComponentArgs, cli_args: &WordkinArgs) -> Result<()> {
    let trie = load_trie(&args.dictionary, cli_args)?;

    let start = Instant::now();
    let (size, members) = if args.members {
        let members = component_members(&trie, &args.word);
        // The start word appears among the members only when stored.
        let size = members.len() - usize::from(trie.contains(&args.word));
        (size, Some(members))
    } else {
        (component_size(&trie, &args.word), None)
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &ComponentResult {
            word: args.word,
            component_size: size,
            members,
            duration_ms,
        },
        cli_args,
    )
}

/// List stored words within the distance threshold of a word.
fn run_neighbors(args: NeighborsArgs, cli_args: &WordkinArgs) -> Result<()> {
    let trie = load_trie(&args.dictionary, cli_args)?;
    let searcher = NeighborSearcher::with_max_distance(args.max_distance);

    let start = Instant::now();
    let mut neighbors = searcher.neighbors(&trie, &args.word);
    neighbors.sort_unstable();
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &NeighborsResult {
            word: args.word,
            max_distance: args.max_distance,
            neighbors,
            duration_ms,
        },
        cli_args,
    )
}

/// Compute the edit distance between two words.
fn run_distance(args: DistanceArgs, cli_args: &WordkinArgs) -> Result<()> {
    let distance = levenshtein_distance(&args.left, &args.right);

    output_result(
        &DistanceResult {
            left: args.left,
            right: args.right,
            distance,
        },
        cli_args,
    )
}

/// Show dictionary and trie statistics.
fn run_stats(args: StatsArgs, cli_args: &WordkinArgs) -> Result<()> {
    let trie = load_trie(&args.dictionary, cli_args)?;

    output_result(
        &StatsResult {
            dictionary_path: args.dictionary.to_string_lossy().to_string(),
            word_count: trie.word_count(),
            node_count: trie.node_count(),
        },
        cli_args,
    )
}
