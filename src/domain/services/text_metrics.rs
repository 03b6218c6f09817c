use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Count word-boundary-delimited tokens. Used for WPM and diagnostics.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Lowercased whitespace tokens, as matched against the filler word list.
///
/// Deliberately a different tokenization than `count_words`: filler words
/// are compared against raw whitespace-split tokens, so a trailing comma on
/// "um," keeps it from matching.
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
