//! # Word Frequency
//!
//! Counts how often each word occurs in a text, using a [`HashedDictionary`] as the tally.
//!
//! Text is split on whitespace; each piece is lowercased and stripped of everything that is not an
//! ASCII letter, and pieces that end up empty are dropped. Counting goes through the
//! [`Dictionary`] contract only: read the current count (absent means zero), then `add` the
//! incremented one. Every analysis builds its own dictionary, so counts never leak from one run
//! into the next.
//!
//! ## Example
//! ```rust
//! use wordfreq::cs::string::word_frequency::{analyze_text, WordFrequencyConfig};
//!
//! let counts = analyze_text("We the People, the Union.", &WordFrequencyConfig::default()).unwrap();
//! assert_eq!(counts[0].word, "the");
//! assert_eq!(counts[0].count, 2);
//! assert_eq!(counts.len(), 4);
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cs::hashing::dictionary::Dictionary;
use crate::cs::hashing::open_addressing::HashedDictionary;
use crate::error::{Error, Result};

/// Table size used for a full document when none is configured. Prime.
pub const DEFAULT_CORPUS_CAPACITY: usize = 1663;

/// Settings for a word-frequency analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFrequencyConfig {
    /// Requested initial capacity of the counting dictionary.
    pub initial_capacity: usize,
}

impl Default for WordFrequencyConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CORPUS_CAPACITY,
        }
    }
}

impl WordFrequencyConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

/// A word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Lowercases `raw` and keeps only `a`-`z`. Returns `None` if nothing is left.
pub fn normalize_token(raw: &str) -> Option<String> {
    let word: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Splits `text` on whitespace and yields the normalized, non-empty tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize_token)
}

/// Tallies `tokens` into a fresh dictionary.
pub fn count_words<I>(
    tokens: I,
    config: &WordFrequencyConfig,
) -> Result<HashedDictionary<String, usize>>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = HashedDictionary::with_capacity(config.initial_capacity)?;
    tally(&mut counts, tokens)?;
    debug!(
        "counted {} distinct words into {} slots ({} collisions)",
        counts.size(),
        counts.capacity(),
        counts.collision_count()
    );
    Ok(counts)
}

fn tally<D, I>(counts: &mut D, tokens: I) -> Result<()>
where
    D: Dictionary<String, usize>,
    I: IntoIterator<Item = String>,
{
    for token in tokens {
        let seen = counts.get_value(token.as_str()).copied().unwrap_or(0);
        counts.add(token, seen + 1)?;
    }
    Ok(())
}

/// Pairs every key of `counts` with its value and orders the result by count, highest first.
///
/// The sort is stable, so words with equal counts keep the dictionary's key order.
pub fn frequencies<D>(counts: &D) -> Vec<WordCount>
where
    D: Dictionary<String, usize>,
{
    let mut result: Vec<WordCount> = counts
        .keys()
        .filter_map(|word| {
            counts.get_value(word.as_str()).map(|&count| WordCount {
                word: word.clone(),
                count,
            })
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Counts the words of `text` and returns them by descending frequency.
pub fn analyze_text(text: &str, config: &WordFrequencyConfig) -> Result<Vec<WordCount>> {
    let counts = count_words(tokenize(text), config)?;
    let result = frequencies(&counts);
    info!("analyzed {} distinct words", result.len());
    Ok(result)
}

/// Reads the corpus at `path` and tallies its words into a fresh dictionary.
pub fn count_file<P: AsRef<Path>>(
    path: P,
    config: &WordFrequencyConfig,
) -> Result<HashedDictionary<String, usize>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    count_words(tokenize(&text), config)
}

/// Reads the corpus at `path` and returns its words by descending frequency.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    config: &WordFrequencyConfig,
) -> Result<Vec<WordCount>> {
    let counts = count_file(path, config)?;
    let result = frequencies(&counts);
    info!("analyzed {} distinct words", result.len());
    Ok(result)
}
