// Colored terminal output for frequency tables and stop-word sets.
//
// Only the interactive-facing displays live here. Anything meant to be piped
// or saved goes through `report::render` instead.

use colored::Colorize;

use super::report::HEADER;
use crate::tags::stopwords::StopWordSet;
use crate::tags::table::FrequencyTable;

/// Display a frequency table as an aligned, colored listing.
pub fn display_table(title: &str, table: &FrequencyTable) {
    for line in table_lines(title, table) {
        println!("{line}");
    }
}

/// The lines `display_table` prints.
pub fn table_lines(title: &str, table: &FrequencyTable) -> Vec<String> {
    let mut lines = vec![String::new(), format!("=== {title} ===").bold().to_string()];

    if table.is_empty() {
        lines.push(format!("  {}", "No tags found.".dimmed()));
        return lines;
    }

    let width = table.widest_word().max("Word".len());
    let (word_heading, count_heading) = HEADER.split_once(" - ").unwrap_or(("Word", "Frequency"));
    lines.push(format!(
        "  {:<width$}  {:>9}",
        word_heading.dimmed(),
        count_heading.dimmed(),
    ));
    lines.push(format!("  {}", "-".repeat(width + 11).dimmed()));

    let top = table.iter().map(|(_, c)| c).max().unwrap_or(0);
    for (word, count) in table.iter() {
        let count_str = format!("{count:>9}");
        let count_str = if count == top {
            count_str.green().bold()
        } else {
            count_str.normal()
        };
        lines.push(format!("  {word:<width$}  {count_str}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "  {} distinct tags, {} occurrences",
        table.len(),
        table.total()
    ));
    lines
}

/// Display a stop-word set: its size, and optionally every entry.
pub fn display_stop_words(name: &str, set: &StopWordSet, list: bool) {
    println!("Loaded {} stop words from {}.", set.len(), name.bold());
    if list {
        for word in set.iter() {
            println!("  {}", word.dimmed());
        }
    }
}
