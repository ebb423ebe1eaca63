// FrequencyTable: ordered word -> count mapping produced by an extraction run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Word frequencies in ascending lexicographic word order.
///
/// Only the crate can add counts; once a table has been handed out it is
/// read-only for rendering and saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub(crate) fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Insert a known count, as read back from a report. Returns false when
    /// `word` was already present.
    pub(crate) fn insert_count(&mut self, word: String, count: u64) -> bool {
        self.counts.insert(word, count).is_none()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
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
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Longest word, for column alignment in terminal output.
    pub fn widest_word(&self) -> usize {
        self.counts.keys().map(|w| w.chars().count()).max().unwrap_or(0)
    }
}
