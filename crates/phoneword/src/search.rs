// Backtracking search over all word/digit partitions of a phone number
//
// The search walks the digit string depth-first. At every position it tries
// each letter the current digit encodes (table order) and, for each letter,
// every dictionary word indexed under it (input order). Every matching word
// is explored, even after an earlier one already led to a translation.
//
// A literal digit is only emitted when no word produced a translation from
// the current position, and never directly after another literal digit. Two
// adjacent unmatched digits therefore dead-end the whole path.

use log::trace;
use phoneword_core::character::strip_separators;
use phoneword_core::{Digit, Token, TokenChain};

use crate::dictionary::DictionaryIndex;
use crate::matcher::match_length;

/// Terminal chains of one search, in depth-first discovery order.
pub type ResultSet = Vec<TokenChain>;

/// Search engine bound to one dictionary index.
///
/// The engine holds no mutable state; one engine (or one index) can serve
/// concurrent `translate` calls.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over `index`.
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// Translate a raw phone number.
    ///
    /// Separators (`-`, `/`) are removed first. The result is empty when the
    /// number has no digits, contains any other character, or every path hits
    /// two adjacent unmatched digits.
    pub fn translate(&self, raw: &str) -> ResultSet {
        self.translate_with(raw, |_| {})
    }

    /// Like [`translate`](Self::translate), calling `on_found` for every
    /// terminal chain as soon as it is discovered.
    pub fn translate_with<F>(&self, raw: &str, on_found: F) -> ResultSet
    where
        F: FnMut(&TokenChain),
    {
        let digits = strip_separators(raw);
        let mut state = SearchState {
            index: self.index,
            results: Vec::new(),
            on_found,
        };
        state.search(&digits, None);
        state.results
    }
}

/// Translate `raw` against `index`. Shorthand for [`SearchEngine::translate`].
pub fn translate(raw: &str, index: &DictionaryIndex) -> ResultSet {
    SearchEngine::new(index).translate(raw)
}

struct SearchState<'a, F> {
    index: &'a DictionaryIndex,
    results: ResultSet,
    on_found: F,
}

impl<F> SearchState<'_, F>
where
    F: FnMut(&TokenChain),
{
    /// Returns `true` if at least one translation was completed below this
    /// point. The return value only gates the literal-digit fallback; results
    /// are collected on every successful termination regardless.
    fn search(&mut self, remaining: &[char], parent: Option<&TokenChain>) -> bool {
        let Some((&c, _)) = remaining.split_first() else {
            return match parent {
                // At least one token is required.
                None => false,
                Some(chain) => {
                    trace!("translation found: {chain}");
                    (self.on_found)(chain);
                    self.results.push(chain.clone());
                    true
                }
            };
        };

        let Some(digit) = Digit::from_char(c) else {
            return false;
        };

        let mut any_success = false;
        let index = self.index;
        for letter in digit.letters().chars() {
            for word in index.lookup(letter) {
                let Some(len) = match_length(word.as_str(), remaining) else {
                    continue;
                };
                let child = TokenChain::push(parent, Token::Word(word.as_str().to_string()));
                if self.search(&remaining[len..], Some(&child)) {
                    any_success = true;
                }
            }
        }

        if !any_success {
            let digit_allowed = parent.is_none_or(|p| !p.last().is_digit());
            if digit_allowed {
                let child = TokenChain::push(parent, Token::Digit(c));
                any_success = self.search(&remaining[1..], Some(&child));
            }
        }

        any_success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dict: &[&str], number: &str) -> Vec<String> {
        let index = DictionaryIndex::build(dict.iter().copied());
        translate(number, &index)
            .iter()
            .map(TokenChain::render)
            .collect()
    }

    #[test]
    fn word_then_digit() {
        assert_eq!(run(&["Tor"], "4824"), ["Tor 4"]);
    }

    #[test]
    fn digit_between_words() {
        assert_eq!(run(&["Tor", "so"], "381482"), ["so 1 Tor"]);
    }

    #[test]
    fn order_follows_bucket_order() {
        assert_eq!(run(&["Tor", "mir", "Mix"], "5624-82"), ["mir Tor", "Mix Tor"]);
        assert_eq!(run(&["Tor", "Mix", "mir"], "5624-82"), ["Mix Tor", "mir Tor"]);
    }

    #[test]
    fn order_follows_table_letter_order() {
        // 4 -> "ft": words under 'f' come before words under 't'.
        assert_eq!(run(&["Torf", "fort", "Tor"], "4824"), ["fort", "Torf", "Tor 4"]);
    }

    #[test]
    fn leading_digit_then_words() {
        let results = run(&["Torf", "fort", "Tor"], "04824");
        assert_eq!(results, ["0 fort", "0 Torf", "0 Tor 4"]);
    }

    #[test]
    fn exhaustive_even_after_success() {
        // Both "Tor" branches are explored although the first already succeeded.
        assert_eq!(run(&["Tor", "Tor"], "482"), ["Tor", "Tor"]);
    }

    #[test]
    fn digit_fallback_only_when_no_word_succeeds() {
        // "Tor" covers 482 completely, so no "4 ..." translation appears.
        let results = run(&["Tor"], "482");
        assert_eq!(results, ["Tor"]);
    }

    #[test]
    fn dead_end_word_does_not_block_digit_fallback() {
        // "fo" matches 48 but nothing covers the remaining 24, so the
        // position still falls back to a literal 4.
        assert_eq!(run(&["fo", "Ort"], "4824"), ["4 Ort"]);
        assert_eq!(run(&["Ort", "fo"], "4824"), ["4 Ort"]);
    }

    #[test]
    fn long_number_of_single_letter_words() {
        let number = "0".repeat(1500);
        let index = DictionaryIndex::build(["e"]);
        let results = translate(&number, &index);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].len(), 1500);
        assert_eq!(results[0].encoded_digits(), number);
    }

    #[test]
    fn two_adjacent_unmatched_digits_yield_nothing() {
        assert!(run(&["Tor"], "99").is_empty());
        assert!(run(&[], "99").is_empty());
        assert!(run(&["Tor"], "48299").is_empty());
    }

    #[test]
    fn single_unmatched_digit() {
        assert_eq!(run(&[], "9"), ["9"]);
    }

    #[test]
    fn empty_number_yields_nothing() {
        assert!(run(&["Tor"], "").is_empty());
        assert!(run(&["Tor"], "-/-").is_empty());
    }

    #[test]
    fn foreign_character_yields_nothing() {
        assert!(run(&["Tor"], "12a34").is_empty());
        assert!(run(&["Tor"], "482 ").is_empty());
        assert!(run(&["Tor"], "4824.").is_empty());
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(run(&["Tor"], "4-8/2"), ["Tor"]);
    }

    #[test]
    fn word_after_digit_after_word() {
        // "neu o\"d 5" style: digit allowed after a word, word after a digit.
        assert_eq!(run(&["je", "da"], "10-9-35"), ["je 9 da"]);
    }

    #[test]
    fn results_never_contain_adjacent_digits() {
        let index = DictionaryIndex::build(["an", "da", "je", "so", "Tor"]);
        for number in ["1078-913-5", "0721/608-4067", "112", "5555", "381482"] {
            for chain in translate(number, &index) {
                assert!(!chain.has_adjacent_digits(), "{number}: {chain}");
            }
        }
    }

    #[test]
    fn callback_sees_every_result_in_order() {
        let index = DictionaryIndex::build(["Torf", "fort", "Tor"]);
        let mut seen = Vec::new();
        let results =
            SearchEngine::new(&index).translate_with("04824", |c| seen.push(c.render()));
        let rendered: Vec<String> = results.iter().map(TokenChain::render).collect();
        assert_eq!(seen, rendered);
    }
}
