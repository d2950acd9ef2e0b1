//! Criterion benchmarks for the wordkin library.
//!
//! Covers the three layers of a query:
//! - Trie construction from a word list
//! - Single-word neighbor enumeration
//! - Whole-component discovery

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordkin::component::component_size;
use wordkin::neighbors::NeighborSearcher;
use wordkin::trie::WordTrie;

/// Generate a deterministic word list with plenty of single-edit links.
fn generate_words(count: usize) -> Vec<String> {
    let onsets = [
        "b", "c", "d", "f", "g", "h", "l", "m", "n", "p", "r", "s", "t", "w",
    ];
    let vowels = ["a", "e", "i", "o", "u"];
    let codas = ["b", "d", "g", "m", "n", "p", "r", "s", "t"];

    let mut words = Vec::with_capacity(count);
    for suffix in ["", "s", "er"] {
        for onset in onsets {
            for vowel in vowels {
                for coda in codas {
                    if words.len() >= count {
                        return words;
                    }
                    words.push(format!("{onset}{vowel}{coda}{suffix}"));
                }
            }
        }
    }
    words
}

fn bench_trie_build(c: &mut Criterion) {
    let words = generate_words(1000);

    let mut group = c.benchmark_group("trie_build");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("1000_words", |b| {
        b.iter(|| WordTrie::from_words(black_box(&words)))
    });
    group.finish();
}

fn bench_neighbor_search(c: &mut Criterion) {
    let words = generate_words(1000);
    let trie = WordTrie::from_words(&words);
    let searcher = NeighborSearcher::new();

    c.bench_function("neighbors_1000_words", |b| {
        b.iter(|| searcher.neighbors(black_box(&trie), black_box("cat")))
    });
}

fn bench_component_size(c: &mut Criterion) {
    let words = generate_words(1000);
    let trie = WordTrie::from_words(&words);

    c.bench_function("component_size_1000_words", |b| {
        b.iter(|| component_size(black_box(&trie), black_box("cat")))
    });
}

criterion_group!(
    benches,
    bench_trie_build,
    bench_neighbor_search,
    bench_component_size
);
criterion_main!(benches);
