// Tag Extractor: counts the significant words in a text document.
//
// This is the library root. `tags` is the core (stop words, tokenization,
// counting); `output` formats results; `session` and `shell` are the thin
// front-end layer the binary drives.

pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod shell;
pub mod tags;
