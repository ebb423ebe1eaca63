// Error type for the tag extraction core.
//
// Every failure the core can report falls into one of three kinds: a source
// or sink could not be read/written, an operation was attempted before its
// inputs were in place, or a saved report could not be parsed back. The
// Display strings double as the messages front ends show to the user.

use std::io;

use thiserror::Error;

/// Coarse classification of a [`TagError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source was unreadable or a sink unwritable.
    Io,
    /// The operation's preconditions were not met.
    InvalidState,
    /// A rendered report did not have the expected shape.
    Malformed,
}

#[derive(Debug, Error)]
pub enum TagError {
    #[error("cannot read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("No text file selected.")]
    NoTextSource,

    #[error("No stop words loaded.")]
    NoStopWords,

    #[error("No data to save.")]
    NothingToSave,

    #[error("malformed report at line {line_no}: {line:?}")]
    Malformed { line_no: usize, line: String },

    #[error("cannot encode frequency table: {0}")]
    Json(#[from] serde_json::Error),
}

impl TagError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TagError::Read { .. } | TagError::Write { .. } | TagError::Json(_) => ErrorKind::Io,
            TagError::NoTextSource | TagError::NoStopWords | TagError::NothingToSave => {
                ErrorKind::InvalidState
            }
            TagError::Malformed { .. } => ErrorKind::Malformed,
        }
    }

    pub(crate) fn read(name: impl Into<String>, source: io::Error) -> Self {
        TagError::Read {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn write(name: impl Into<String>, source: io::Error) -> Self {
        TagError::Write {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T, E = TagError> = std::result::Result<T, E>;
