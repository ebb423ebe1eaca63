// Plain-text frequency reports.
//
// `render` is the single formatting routine: the terminal, the shell and the
// save path all print exactly these lines. `parse_report` reads them back.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Result, TagError};
use crate::tags::source::display_name;
use crate::tags::table::FrequencyTable;

/// First line of every report.
pub const HEADER: &str = "Word - Frequency";

/// Separator between a word and its count.
pub const SEPARATOR: &str = " - ";

/// Render a table: the header, then `"<word> - <count>"` per entry in table order.
pub fn render(table: &FrequencyTable) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(
        table
            .iter()
            .map(|(word, count)| format!("{word}{SEPARATOR}{count}")),
    );
    lines
}

/// Write the rendered report, each line newline-terminated.
pub fn write_report<W: Write + ?Sized>(writer: &mut W, table: &FrequencyTable) -> io::Result<()> {
    for line in render(table) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Save the rendered report to `path`, replacing any existing file.
pub fn save_report(path: &Path, table: &FrequencyTable) -> Result<()> {
    replace_file(path, |writer| write_report(writer, table))?;
    info!(path = %path.display(), entries = table.len(), "Saved report");
    Ok(())
}

/// Write a file by filling a temporary sibling and renaming it over `path`.
///
/// A failure at any step leaves an existing file at `path` untouched and
/// removes the temporary file.
pub(crate) fn replace_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let name = display_name(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TagError::write(name.clone(), e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        fill(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| TagError::write(name.clone(), e))?;
    }
    tmp.persist(path)
        .map_err(|e| TagError::write(name, e.error))?;
    Ok(())
}

/// Parse rendered report lines back into a table.
///
/// Trailing blank lines are ignored. Anything else that is not a header or a
/// `word - count` row with a lowercase alphabetic word is rejected.
pub fn parse_report<I, S>(lines: I) -> Result<FrequencyTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = FrequencyTable::default();
    let mut saw_header = false;
    let mut blank_tail = None;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        let line = line.as_ref();
        let malformed = || TagError::Malformed {
            line_no,
            line: line.to_string(),
        };

        if line.is_empty() {
            blank_tail.get_or_insert(line_no);
            continue;
        }
        if let Some(blank_no) = blank_tail {
            return Err(TagError::Malformed {
                line_no: blank_no,
                line: String::new(),
            });
        }
        if !saw_header {
            if line != HEADER {
                return Err(malformed());
            }
            saw_header = true;
            continue;
        }

        let (word, count) = line.split_once(SEPARATOR).ok_or_else(malformed)?;
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(malformed());
        }
        let count: u64 = count.parse().map_err(|_| malformed())?;
        if count == 0 || !table.insert_count(word.to_string(), count) {
            return Err(malformed());
        }
    }

    if !saw_header {
        return Err(TagError::Malformed {
            line_no: 1,
            line: String::new(),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tags::{StopWordSet, TagCounter};

    fn table(lines: &[&str]) -> FrequencyTable {
        TagCounter::new()
            .extract_lines(lines.iter().copied(), &StopWordSet::from_lines(["the"]))
            .unwrap()
    }

    #[test]
    fn test_render_empty_table_is_header_only() {
        assert_eq!(render(&FrequencyTable::default()), vec![HEADER.to_string()]);
    }

    #[test]
    fn test_write_report_terminates_lines() {
        let mut out = Vec::new();
        write_report(&mut out, &table(&["b a b"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Word - Frequency\na - 1\nb - 2\n");
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        for bad in [
            vec!["Word - Frequency", "fox 2"],
            vec!["Word - Frequency", "fox - two"],
            vec!["Word - Frequency", "Fox - 2"],
            vec!["Word - Frequency", "fox - 0"],
            vec!["Word - Frequency", "fox - 1", "fox - 2"],
            vec!["fox - 2"],
            vec!["Word - Frequency", "", "fox - 1"],
        ] {
            let err = parse_report(&bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Malformed, "{bad:?}");
        }
        assert!(parse_report(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_failed_write_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.txt");
        std::fs::write(&path, "Word - Frequency\nold - 1\n").unwrap();

        let err = replace_file(&path, |writer| {
            writer.write_all(b"Word - Frequency\nhalf")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("tags.txt"));

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Word - Frequency\nold - 1\n"
        );
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1, "temporary file left behind");
    }

    #[test]
    fn test_save_replaces_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.txt");
        std::fs::write(&path, "stale\n".repeat(50)).unwrap();
        save_report(&path, &table(&["b a b"])).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Word - Frequency\na - 1\nb - 2\n"
        );
    }

    #[test]
    fn test_parse_ignores_trailing_blank_lines() {
        let parsed = parse_report(["Word - Frequency", "fox - 2", "", ""]).unwrap();
        assert_eq!(parsed.get("fox"), Some(2));
    }
}
