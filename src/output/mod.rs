// Output formatting: plain-text reports, JSON, and colored terminal display.

pub mod report;
pub mod terminal;

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use tracing::info;

use crate::error::{Result, TagError};
use crate::tags::table::FrequencyTable;

/// How a frequency table is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Word - Frequency` header followed by `word - count` rows
    #[default]
    Text,
    /// A JSON object mapping each word to its count
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("unknown output format {s:?} (expected text or json)"))
    }
}

impl OutputFormat {
    /// Write `table` to `writer` in this format. `name` labels write errors.
    pub fn write_to<W: Write>(self, writer: &mut W, table: &FrequencyTable, name: &str) -> Result<()> {
        let written = match self {
            OutputFormat::Text => report::write_report(writer, table),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(table)?;
                writeln!(writer, "{json}")
            }
        };
        written
            .and_then(|_| writer.flush())
            .map_err(|e| TagError::write(name, e))
    }

    /// Write `table` to the file at `path`, replacing any existing file.
    pub fn save(self, path: &Path, table: &FrequencyTable) -> Result<()> {
        match self {
            OutputFormat::Text => report::save_report(path, table),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(table)?;
                report::replace_file(path, |writer| writeln!(writer, "{json}"))?;
                info!(path = %path.display(), entries = table.len(), "Saved JSON report");
                Ok(())
            }
        }
    }
}
