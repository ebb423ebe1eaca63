// Tag extractor trait, the seam between front ends and the counting strategy.
//
// Front ends only ever ask for "a frequency table from this source minus these
// stop words". TagCounter is the plain word counter; another strategy (say,
// one that stems tokens first) can slot in without touching the callers.

use super::source::TextSource;
use super::stopwords::StopWordSet;
use super::table::FrequencyTable;
use crate::error::Result;

/// Trait for turning a text source into a frequency table of tags.
pub trait TagExtractor {
    /// Read `source` completely and count every token not in `stop_words`.
    fn extract(&self, source: &dyn TextSource, stop_words: &StopWordSet) -> Result<FrequencyTable>;
}
