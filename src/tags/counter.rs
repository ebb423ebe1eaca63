// Word-frequency tag counter.
//
// Reads a text source line by line, normalizes and splits each line, drops
// stop words and counts the rest. The run is all-or-nothing: a read error
// part way through discards whatever had been counted so far.

use tracing::{debug, info};

use super::source::TextSource;
use super::stopwords::StopWordSet;
use super::table::FrequencyTable;
use super::tokenize::{normalize_line, split_tokens};
use super::traits::TagExtractor;
use crate::error::{Result, TagError};

/// Plain frequency counter, the default extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagCounter;

impl TagCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count the tags in already-read lines.
    pub fn extract_lines<I, S>(&self, lines: I, stop_words: &StopWordSet) -> Result<FrequencyTable>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if stop_words.is_empty() {
            return Err(TagError::NoStopWords);
        }
        let mut tally = Tally::new(stop_words);
        for line in lines {
            tally.add_line(line.as_ref());
        }
        Ok(tally.finish("<lines>"))
    }
}

impl TagExtractor for TagCounter {
    fn extract(&self, source: &dyn TextSource, stop_words: &StopWordSet) -> Result<FrequencyTable> {
        if stop_words.is_empty() {
            return Err(TagError::NoStopWords);
        }
        let mut tally = Tally::new(stop_words);
        source.each_line(&mut |line| tally.add_line(line))?;
        Ok(tally.finish(&source.name()))
    }
}

/// Running state of one extraction.
struct Tally<'a> {
    stop_words: &'a StopWordSet,
    table: FrequencyTable,
    lines: usize,
    tokens: usize,
    filtered: usize,
}

impl<'a> Tally<'a> {
    fn new(stop_words: &'a StopWordSet) -> Self {
        Self {
            stop_words,
            table: FrequencyTable::new(),
            lines: 0,
            tokens: 0,
            filtered: 0,
        }
    }

    fn add_line(&mut self, line: &str) {
        self.lines += 1;
        let normalized = normalize_line(line);
        for token in split_tokens(&normalized) {
            self.tokens += 1;
            if self.stop_words.contains(token) {
                self.filtered += 1;
            } else {
                self.table.increment(token);
            }
        }
    }

    fn finish(self, source: &str) -> FrequencyTable {
        debug!(
            source,
            lines = self.lines,
            tokens = self.tokens,
            filtered = self.filtered,
            "Tokenized text"
        );
        info!(
            source,
            tags = self.table.len(),
            occurrences = self.table.total(),
            "Tag extraction complete"
        );
        self.table
    }
}
