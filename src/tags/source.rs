// Text sources: where stop words and documents are read from.
//
// Both the stop-word loader and the tag counter consume "a text source, read
// line by line". Files, stdin and in-memory text all implement the same trait
// so the core never cares which one it was handed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Result, TagError};

/// A readable source of lines.
pub trait TextSource {
    /// Short human-readable name, used in messages and errors.
    fn name(&self) -> String;

    /// Open the source for buffered line reading.
    fn open(&self) -> Result<Box<dyn BufRead + '_>>;

    /// Feed every line (without its terminator) to `f`.
    ///
    /// Read errors, including invalid UTF-8, surface as `TagError::Read`.
    /// The underlying handle is dropped on every exit path.
    fn each_line(&self, f: &mut dyn FnMut(&str)) -> Result<()> {
        let reader = self.open()?;
        for line in reader.lines() {
            let line = line.map_err(|e| TagError::read(self.name(), e))?;
            f(&line);
        }
        Ok(())
    }
}

/// A file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        display_name(&self.path)
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(|e| TagError::read(self.name(), e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Standard input. Can only be consumed once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(io::stdin().lock()))
    }
}

/// Text already in memory, with a label for messages.
#[derive(Debug, Clone, Copy)]
pub struct InlineText<'a> {
    label: &'a str,
    text: &'a str,
}

impl<'a> InlineText<'a> {
    pub fn new(label: &'a str, text: &'a str) -> Self {
        Self { label, text }
    }
}

impl TextSource for InlineText<'_> {
    fn name(&self) -> String {
        self.label.to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(self.text.as_bytes()))
    }
}

/// Build a source from a command-line argument: `-` means stdin.
pub fn source_from_arg(arg: &Path) -> Box<dyn TextSource> {
    if arg == Path::new("-") {
        Box::new(StdinSource)
    } else {
        Box::new(FileSource::new(arg))
    }
}

/// The file-name part of a path, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_inline_lines() {
        let source = InlineText::new("memo", "first line\r\nsecond\n\nlast");
        let mut seen = Vec::new();
        source.each_line(&mut |l| seen.push(l.to_string())).unwrap();
        assert_eq!(seen, vec!["first line", "second", "", "last"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here/words.txt");
        let err = source.each_line(&mut |_| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        let err = FileSource::new(&path).each_line(&mut |_| {}).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_source_from_arg() {
        assert_eq!(source_from_arg(Path::new("-")).name(), "<stdin>");
        assert_eq!(source_from_arg(Path::new("/tmp/book.txt")).name(), "book.txt");
    }
}
