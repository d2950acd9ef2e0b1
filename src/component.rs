//! Connected-component discovery over the implicit single-edit graph.
//!
//! Two stored words are adjacent when their edit distance is at most
//! one. The graph is never materialized; adjacency is evaluated on
//! demand through [`NeighborSearcher`], and a frontier traversal with a
//! per-call discovered set walks the component of a start word.

use ahash::AHashSet;
use log::debug;

use crate::neighbors::NeighborSearcher;
use crate::trie::WordTrie;

/// Count the distinct words reachable from `start` by chains of
/// single-edit hops, excluding `start` itself.
///
/// The start word does not have to be stored in the trie: an absent
/// start still collects the component of its stored neighbors and is
/// simply never counted.
pub fn component_size(trie: &WordTrie, start: &str) -> usize {
    let discovered = discover(trie, start);
    discovered.len() - usize::from(discovered.contains(start))
}

/// Collect the words in the component of `start`, sorted.
///
/// Includes `start` itself when it is stored in the trie.
pub fn component_members(trie: &WordTrie, start: &str) -> Vec<String> {
    let mut members: Vec<String> = discover(trie, start).into_iter().collect();
    members.sort_unstable();
    members
}

/// Frontier traversal: pop a word, enumerate its neighbors, push every
/// word seen for the first time. The discovered set is scoped to this
/// call, so repeated and concurrent queries on a shared trie stay
/// independent.
fn discover(trie: &WordTrie, start: &str) -> AHashSet<String> {
    let searcher = NeighborSearcher::new();
    let mut discovered = AHashSet::new();
    let mut frontier = vec![start.to_string()];

    while let Some(word) = frontier.pop() {
        for neighbor in searcher.neighbors(trie, &word) {
            if discovered.insert(neighbor.clone()) {
                frontier.push(neighbor);
            }
        }
    }

    debug!(
        "component of {start:?}: {} words discovered",
        discovered.len()
    );
    discovered
}
