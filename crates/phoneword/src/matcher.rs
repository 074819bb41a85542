// Whole-word matching of a dictionary word against the head of a digit string

use phoneword_core::Digit;
use phoneword_core::character::normalize;

/// Check whether the letters of `word` encode the first digits of `digits`.
///
/// The word is normalized first (non-letters removed). Returns the number of
/// digits consumed, which is always the normalized length; a word never
/// matches a shorter prefix of itself.
///
/// Returns `None` when:
/// - the normalized word is empty,
/// - it is longer than `digits`,
/// - any character inside the match window is not an ASCII digit,
/// - any letter is not encoded by the digit at its position.
pub fn match_length(word: &str, digits: &[char]) -> Option<usize> {
    let letters: Vec<char> = normalize(word).chars().collect();
    if letters.is_empty() || letters.len() > digits.len() {
        return None;
    }
    for (&letter, &c) in letters.iter().zip(digits) {
        let digit = Digit::from_char(c)?;
        if !digit.encodes(letter) {
            return None;
        }
    }
    Some(letters.len())
}
