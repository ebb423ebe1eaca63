use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::output::OutputFormat;

/// File name looked up in the platform config directory when no stop-words
/// file is configured.
pub const DEFAULT_STOP_WORDS_FILE: &str = "stop_words.txt";

/// Settings loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so everything here can
/// also live in a project-local .env. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stop-words file used when none is given on the command line
    /// (TAGEXTRACT_STOP_WORDS, else `<config dir>/tagextract/stop_words.txt`
    /// if that file exists)
    pub stop_words_path: Option<PathBuf>,
    /// Raw TAGEXTRACT_FORMAT value, checked only when a command writes a table
    pub format_setting: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let stop_words_path = match env::var("TAGEXTRACT_STOP_WORDS") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
            _ => default_stop_words_path().filter(|p| p.is_file()),
        };

        let format_setting = env::var("TAGEXTRACT_FORMAT")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            stop_words_path,
            format_setting,
        })
    }

    /// Output format used when `--format` is not given (TAGEXTRACT_FORMAT, else text).
    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.format_setting {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("TAGEXTRACT_FORMAT: {e}")),
            None => Ok(OutputFormat::default()),
        }
    }

    /// The stop-words file to use: the explicit one if given, else the configured one.
    ///
    /// Call this before any operation that needs stop words from a file.
    pub fn require_stop_words<'a>(&'a self, explicit: Option<&'a Path>) -> Result<&'a Path> {
        match explicit.or(self.stop_words_path.as_deref()) {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No stop words loaded. Pass --stop-words <file> or --builtin <language>,\n\
                 or set TAGEXTRACT_STOP_WORDS in your .env file."
            ),
        }
    }
}

/// Where the default stop-words file lives on this platform.
pub fn default_stop_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagextract").join(DEFAULT_STOP_WORDS_FILE))
}
