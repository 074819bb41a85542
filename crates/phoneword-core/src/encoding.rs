// Digit-to-letters encoding table
//
// Every digit 0-9 stands for a fixed, ordered group of lowercase letters.
// The table is a process-wide constant; lookups never allocate.

use std::fmt;

/// Error type for encoding table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The value is not a decimal digit in `0..=9`.
    #[error("invalid digit: {0} (expected 0..=9)")]
    InvalidDigit(u32),
}

/// Letters encoded by each digit, indexed by digit value.
///
/// Order matters: the search engine tries letters in exactly this order.
const LETTERS: [&str; 10] = [
    "e",   // 0
    "jnq", // 1
    "rwx", // 2
    "dsy", // 3
    "ft",  // 4
    "am",  // 5
    "civ", // 6
    "bku", // 7
    "lop", // 8
    "ghz", // 9
];

// ---------------------------------------------------------------------------
// Digit
// ---------------------------------------------------------------------------

/// A validated decimal digit (`0..=9`).
///
/// Holding a `Digit` is proof that the value indexes the encoding table, so
/// the `Digit`-typed lookups below are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value.
    pub fn new(value: u32) -> Result<Self, EncodingError> {
        if value <= 9 {
            Ok(Self(value as u8))
        } else {
            Err(EncodingError::InvalidDigit(value))
        }
    }

    /// Create a digit from an ASCII digit character.
    ///
    /// Returns `None` for anything outside `'0'..='9'`, including non-ASCII
    /// Unicode digits.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Self(c as u8 - b'0'))
        } else {
            None
        }
    }

    /// Numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for this digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Letters encoded by this digit, in table order.
    pub fn letters(self) -> &'static str {
        LETTERS[usize::from(self.0)]
    }

    /// Whether `letter` (case-insensitive) is encoded by this digit.
    pub fn encodes(self, letter: char) -> bool {
        let mut lower = letter.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => self.letters().contains(l),
            _ => false,
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = EncodingError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(EncodingError::InvalidDigit(c as u32))
    }
}

// ---------------------------------------------------------------------------
// Table lookups
// ---------------------------------------------------------------------------

/// Letters encoded by `digit`, in table order.
///
/// Fails with [`EncodingError::InvalidDigit`] when `digit > 9`.
pub fn letters_for(digit: u32) -> Result<&'static str, EncodingError> {
    Digit::new(digit).map(Digit::letters)
}

/// Whether `letter` (case-insensitive) is encoded by `digit`.
///
/// Fails with [`EncodingError::InvalidDigit`] when `digit > 9`.
pub fn matches(digit: u32, letter: char) -> Result<bool, EncodingError> {
    Digit::new(digit).map(|d| d.encodes(letter))
}

/// Reverse lookup: the digit that encodes `letter`, if any.
pub fn digit_for(letter: char) -> Option<Digit> {
    (0..10u8).map(Digit).find(|d| d.encodes(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_fixed_encoding() {
        let expected = [
            "e", "jnq", "rwx", "dsy", "ft", "am", "civ", "bku", "lop", "ghz",
        ];
        for (d, letters) in expected.iter().enumerate() {
            assert_eq!(letters_for(d as u32).unwrap(), *letters);
        }
    }

    #[test]
    fn letters_for_out_of_range() {
        assert_eq!(letters_for(10), Err(EncodingError::InvalidDigit(10)));
        assert_eq!(letters_for(u32::MAX), Err(EncodingError::InvalidDigit(u32::MAX)));
    }

    #[test]
    fn matches_is_case_insensitive() {
        assert_eq!(matches(4, 't'), Ok(true));
        assert_eq!(matches(4, 'T'), Ok(true));
        assert_eq!(matches(4, 'o'), Ok(false));
        assert_eq!(matches(8, 'O'), Ok(true));
    }

    #[test]
    fn matches_out_of_range() {
        assert_eq!(matches(11, 'a'), Err(EncodingError::InvalidDigit(11)));
    }

    #[test]
    fn non_letters_never_match() {
        for d in 0..10 {
            assert_eq!(matches(d, '"'), Ok(false));
            assert_eq!(matches(d, '5'), Ok(false));
        }
    }

    #[test]
    fn every_ascii_letter_has_exactly_one_digit() {
        for c in 'a'..='z' {
            let hits = (0..10).filter(|&d| matches(d, c).unwrap()).count();
            assert_eq!(hits, 1, "letter {c} is mapped {hits} times");
        }
        assert_eq!(digit_for('T').map(Digit::value), Some(4));
        assert_eq!(digit_for('h').map(Digit::value), Some(9));
        assert_eq!(digit_for('\u{00E4}'), None);
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
        assert_eq!(Digit::from_char('a'), None);
        // Arabic-Indic digit three is not an ASCII digit
        assert_eq!(Digit::from_char('\u{0663}'), None);
        assert_eq!(Digit::try_from('x'), Err(EncodingError::InvalidDigit('x' as u32)));
    }

    #[test]
    fn digit_round_trips_char() {
        for c in '0'..='9' {
            assert_eq!(Digit::from_char(c).unwrap().as_char(), c);
        }
        assert_eq!(Digit::new(3).unwrap().to_string(), "3");
    }
}
