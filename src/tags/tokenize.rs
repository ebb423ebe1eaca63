// Line normalization and tokenization.
//
// A line is lowercased, then every character that is not an ASCII letter or
// ASCII whitespace is deleted outright (no replacement), and what remains is
// split on runs of whitespace. "don't" becomes "dont", "e-mail" becomes
// "email", "3rd" becomes "rd", and accented letters vanish entirely.

use std::sync::LazyLock;

use regex_lite::Regex;

// `\s` in regex-lite is ASCII-only: space, \t, \n, \v, \f, \r.
static NOT_LETTER_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid character filter"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid separator pattern"));

/// Lowercase a line and strip everything but ASCII letters and whitespace.
pub fn normalize_line(line: &str) -> String {
    let lower = line.to_lowercase();
    NOT_LETTER_OR_SPACE.replace_all(&lower, "").into_owned()
}

/// Split a normalized line into non-empty tokens.
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    WHITESPACE_RUN.split(normalized).filter(|t| !t.is_empty())
}

/// Normalize and split a raw line in one step.
pub fn tokens(line: &str) -> Vec<String> {
    let normalized = normalize_line(line);
    split_tokens(&normalized).map(str::to_string).collect()
}
