// Session state shared by the front ends.
//
// Holds what the user has chosen so far: a text file, a stop-word set, and
// the last extraction result. Each operation either succeeds and updates the
// state, or fails and leaves every field exactly as it was.
//
// Paths are taken literally: `-` is a file named "-", not stdin. The shell
// reads its commands from stdin, so stdin is never available as a source here.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, TagError};
use crate::output::report;
use crate::tags::source::{display_name, FileSource};
use crate::tags::{BuiltinLanguage, FrequencyTable, StopWordSet, TagCounter, TagExtractor};

#[derive(Debug, Default)]
pub struct Session {
    text_path: Option<PathBuf>,
    stop_words: StopWordSet,
    last_result: Option<FrequencyTable>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the text file to extract from. Nothing is read yet.
    pub fn select_text(&mut self, path: impl Into<PathBuf>) -> String {
        let path = path.into();
        let name = display_name(&path);
        info!(path = %path.display(), "Selected text file");
        self.text_path = Some(path);
        name
    }

    /// Load stop words from `path`, replacing the current set on success.
    pub fn load_stop_words(&mut self, path: &Path) -> Result<usize> {
        self.stop_words.reload(&FileSource::new(path))
    }

    /// Replace the current set with a bundled list.
    pub fn use_builtin_stop_words(&mut self, language: BuiltinLanguage) -> usize {
        self.stop_words = StopWordSet::builtin(language);
        self.stop_words.len()
    }

    /// Run an extraction with the current text file and stop words.
    pub fn extract(&mut self) -> Result<&FrequencyTable> {
        self.extract_with(&TagCounter::new())
    }

    /// Run an extraction with a specific extractor.
    pub fn extract_with(&mut self, extractor: &dyn TagExtractor) -> Result<&FrequencyTable> {
        let path = self.text_path.as_deref().ok_or(TagError::NoTextSource)?;
        if self.stop_words.is_empty() {
            return Err(TagError::NoStopWords);
        }
        let table = extractor.extract(&FileSource::new(path), &self.stop_words)?;
        Ok(self.last_result.insert(table))
    }

    /// Save the last extraction result as a rendered report.
    pub fn save(&self, path: &Path) -> Result<String> {
        let table = self.last_result.as_ref().ok_or(TagError::NothingToSave)?;
        report::save_report(path, table)?;
        Ok(display_name(path))
    }

    pub fn text_path(&self) -> Option<&Path> {
        self.text_path.as_deref()
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn last_result(&self) -> Option<&FrequencyTable> {
        self.last_result.as_ref()
    }
}
