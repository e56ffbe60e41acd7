//! Text-composition helpers shared by the generators.
//!
//! Everything here is total over arbitrary printable text: pathologically
//! long or oddly encoded input is clipped or segmented, never rejected.

/// Words too generic to carry keyword weight.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "your", "you", "how", "that", "this", "from",
    "into", "what", "are", "our", "his", "her", "its", "was", "were", "will",
];

/// Clips `text` to at most `max_chars` characters, cutting at a char
/// boundary and appending an ellipsis when anything was removed. Trailing
/// whitespace before the ellipsis is dropped, so the result may be shorter
/// than the limit.
#[must_use]
pub fn clip(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars - 1).collect();
    format!("{}…", kept.trim_end())
}

/// Segments `text` into lowercase alphanumeric words.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Segments `text` into lowercase words, dropping stop words and anything
/// shorter than three characters.
#[must_use]
pub fn significant_words(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|w| w.chars().count() >= 3 && !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Returns the first `max_words` whitespace-separated words of `text`.
#[must_use]
pub fn lead(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
