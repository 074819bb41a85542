// Character classification helpers for phone numbers and dictionary words

/// Positional separators allowed in phone numbers. They carry no encoding
/// meaning and never appear in output tokens.
pub const SEPARATORS: &[char] = &['-', '/'];

/// Whether `c` is a phone number separator.
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Remove every separator from a raw phone number.
///
/// Other characters are kept as they are; the search rejects them later.
pub fn strip_separators(raw: &str) -> Vec<char> {
    raw.chars().filter(|&c| !is_separator(c)).collect()
}

/// Remove every non-letter character from a dictionary word, preserving
/// order and case of the remaining letters.
///
/// `Bo"s` normalizes to `Bos`.
pub fn normalize(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Lowercased first character of `word`, used as the dictionary index key.
///
/// Returns `None` for the empty string.
pub fn index_key(word: &str) -> Option<char> {
    let first = word.chars().next()?;
    first.to_lowercase().next()
}
