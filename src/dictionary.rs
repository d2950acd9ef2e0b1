//! Dictionary loading and management.
//!
//! A [`Dictionary`] is an ordered, deduplicated word list. It is the
//! loading side of the system: words come in from a whitespace-delimited
//! file or corpus string, and go out as a built [`WordTrie`].

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::debug;

use crate::error::Result;
use crate::trie::WordTrie;

/// An ordered, deduplicated collection of dictionary words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Words in first-seen order.
    words: Vec<String>,
    /// Set of all words for fast membership checks.
    word_set: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: Vec::new(),
            word_set: AHashSet::new(),
        }
    }

    /// Add a word to the dictionary.
    ///
    /// Returns `true` if the word was not present before. Words are kept
    /// verbatim; no normalization is applied.
    pub fn add_word(&mut self, word: &str) -> bool {
        if self.word_set.insert(word.to_string()) {
            self.words.push(word.to_string());
            true
        } else {
            false
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Get the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the words in first-seen order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the dictionary, yielding the word list.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Load a whitespace-delimited word file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Split a corpus on whitespace and collect the distinct tokens.
    pub fn from_corpus(text: &str) -> Self {
        let mut dictionary = Dictionary::new();
        for token in text.split_whitespace() {
            dictionary.add_word(token);
        }
        debug!("dictionary: {} distinct words", dictionary.word_count());
        dictionary
    }

    /// Build the prefix-tree index over the stored words.
    pub fn build_trie(&self) -> WordTrie {
        WordTrie::from_words(&self.words)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for word in iter {
            dictionary.add_word(word.as_ref());
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dictionary = Dictionary::new();

        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("cat"));

        assert!(dictionary.add_word("cat"));
        assert!(!dictionary.add_word("cat"));
        assert!(dictionary.add_word("dog"));

        assert!(dictionary.contains("cat"));
        assert_eq!(dictionary.word_count(), 2);
        assert_eq!(dictionary.words(), ["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_words_are_kept_verbatim() {
        let mut dictionary = Dictionary::new();

        dictionary.add_word("Cat");
        assert!(dictionary.contains("Cat"));
        assert!(!dictionary.contains("cat"));
    }

    #[test]
    fn test_from_corpus() {
        let dictionary = Dictionary::from_corpus("cat cot\ncog  dog\tdot cat");

        assert_eq!(dictionary.word_count(), 5);
        assert!(dictionary.contains("cog"));
        assert!(dictionary.contains("dot"));
    }

    #[test]
    fn test_from_iterator() {
        let dictionary: Dictionary = ["cat", "dog", "cat"].into_iter().collect();

        assert_eq!(dictionary.word_count(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat cot cog").unwrap();
        writeln!(temp_file, "dog dot").unwrap();
        temp_file.flush().unwrap();

        let dictionary = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dictionary.word_count(), 5);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dot"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Dictionary::load_from_file("/nonexistent/words.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_trie() {
        let dictionary = Dictionary::from_corpus("cat cot dog");
        let trie = dictionary.build_trie();

        assert_eq!(trie.word_count(), 3);
        assert!(trie.contains("cot"));
    }
}
