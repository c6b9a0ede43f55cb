//! # Title Abbreviation Check

use crate::util::LookupList;

/// Returns `true` if the last whitespace-delimited word of `text` is a title.
///
/// Words are split on ASCII whitespace only; a non-breaking space is part of
/// the word. The word is lowercased before the lookup; `titles` are expected
/// in lowercase. Text with no whitespace is checked as a single word.
pub fn check_if_title(
    text: &str,
    titles: &LookupList<String>,
) -> bool {
    let last = text
        .split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
        .next_back();
    match last {
        Some(word) => titles.contains(word.to_lowercase().as_str()),
        None => false,
    }
}
