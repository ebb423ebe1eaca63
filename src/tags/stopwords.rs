// Stop-word sets.
//
// Entries are trimmed and lowercased on the way in and nothing else. They are
// not run through the tokenizer's character filter, so a list entry like
// "don't" never matches a token (tokens have had their apostrophes removed).

use std::collections::BTreeSet;

use clap::ValueEnum;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use super::source::TextSource;
use crate::error::Result;

/// Languages with a bundled stop-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinLanguage {
    #[value(alias = "en")]
    English,
    #[value(alias = "fr")]
    French,
    #[value(alias = "de")]
    German,
    #[value(alias = "it")]
    Italian,
    #[value(alias = "pt")]
    Portuguese,
    #[value(alias = "es")]
    Spanish,
}

impl BuiltinLanguage {
    /// Parse a language name or ISO 639-1 code ("en", "english", ...).
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    fn to_stop_words_language(self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Spanish => LANGUAGE::Spanish,
        }
    }
}

/// A set of normalized (trimmed, lowercase, non-empty) stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: BTreeSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw lines. Lines that are blank after trimming are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            set.insert_raw(line.as_ref());
        }
        set
    }

    /// Read a set from a text source, one stop word per line.
    pub fn from_source(source: &dyn TextSource) -> Result<Self> {
        let mut set = Self::new();
        let mut blank = 0usize;
        source.each_line(&mut |line| {
            if !set.insert_raw(line) {
                blank += 1;
            }
        })?;
        debug!(source = %source.name(), blank, "Skipped blank stop-word lines");
        info!(count = set.len(), source = %source.name(), "Loaded stop words");
        Ok(set)
    }

    /// The bundled list for `language`, normalized like any other source.
    pub fn builtin(language: BuiltinLanguage) -> Self {
        let words = get(language.to_stop_words_language());
        let set = Self::from_lines(words.iter().map(|w| w.to_string()));
        info!(count = set.len(), ?language, "Loaded built-in stop words");
        set
    }

    /// Replace the contents with those read from `source`.
    ///
    /// The old contents are discarded only once the new source has been read
    /// completely; on error the set is left as it was.
    pub fn reload(&mut self, source: &dyn TextSource) -> Result<usize> {
        let fresh = Self::from_source(source)?;
        *self = fresh;
        Ok(self.len())
    }

    /// Exact membership test. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Insert one raw line; returns false when it was blank and skipped.
    fn insert_raw(&mut self, line: &str) -> bool {
        let word = line.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::source::{FileSource, InlineText};

    #[test]
    fn test_from_lines_normalizes() {
        let set = StopWordSet::from_lines(["  The ", "AND", "and", "", "   ", "\tof\t"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("of"));
        assert!(!set.contains("The"));
        assert!(!set.contains(""));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["and", "of", "the"]);
    }

    #[test]
    fn test_reload_replaces_contents() {
        let mut set = StopWordSet::from_lines(["old"]);
        let count = set.reload(&InlineText::new("new", "a\nb\n")).unwrap();
        assert_eq!(count, 2);
        assert!(!set.contains("old"));
        assert!(set.contains("a"));
    }

    #[test]
    fn test_failed_reload_keeps_contents() {
        let mut set = StopWordSet::from_lines(["keep", "me"]);
        let result = set.reload(&FileSource::new("/no/such/stop_words.txt"));
        assert!(result.is_err());
        assert_eq!(set.len(), 2);
        assert!(set.contains("keep"));
    }

    #[test]
    fn test_builtin_english() {
        let set = StopWordSet::builtin(BuiltinLanguage::English);
        assert!(!set.is_empty());
        assert!(set.contains("the"));
        assert!(set.iter().all(|w| w == w.trim() && !w.is_empty()));
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(BuiltinLanguage::parse("EN"), Some(BuiltinLanguage::English));
        assert_eq!(BuiltinLanguage::parse("german"), Some(BuiltinLanguage::German));
        assert_eq!(BuiltinLanguage::parse("klingon"), None);
    }
}
