use std::{cmp::Ordering, collections::HashMap, io::{self, BufRead}};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{stop_words::StopWordSet, word_filtering::reader_to_words};

/// Occurrence counts of normalized words.
///
/// Keys are never empty and never appear in the stop word set
/// that was active when the table was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    fn increment(&mut self, word: String) {
        self.counts.entry(word)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

/// Higher counts first, ties broken by ascending word.
impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.count.cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counts every word of `reader` that is not in `stop_words`.
///
/// The input is consumed line by line. An input without any countable word
/// yields an empty table rather than an error.
pub fn extract_tags(reader: impl BufRead, stop_words: &StopWordSet) -> io::Result<FrequencyTable> {
    let mut table = FrequencyTable::default();
    let mut skipped = 0usize;

    for word in reader_to_words(reader) {
        let word = word?;
        if stop_words.contains(&word) {
            skipped += 1;
            continue;
        }
        table.increment(word);
    }

    debug!("extracted {} words ({} distinct), skipped {} stop words",
        table.total(), table.len(), skipped);
    Ok(table)
}

pub fn sort_by_frequency(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table.iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();
    entries.sort();
    entries
}
