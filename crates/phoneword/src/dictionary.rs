// Dictionary index: words grouped by lowercased first character
//
// The index is built once and never mutated afterwards. Within a bucket the
// words keep their input order, and duplicates are retained.

use hashbrown::HashMap;

use phoneword_core::character::index_key;

/// A dictionary entry as supplied (case and punctuation preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryWord {
    raw: String,
}

impl DictionaryWord {
    /// Create a dictionary word from its original text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The original text, used for display.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for DictionaryWord {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Words grouped by the lowercased first character of their raw text.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: HashMap<char, Vec<DictionaryWord>>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Build an index from an ordered word list.
    ///
    /// Empty words are skipped. Nothing else is validated: a word starting
    /// with punctuation is indexed under that punctuation character and will
    /// simply never match.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        index.extend(words);
        index
    }

    /// Append one word to the end of its bucket. Empty words are ignored.
    pub fn push(&mut self, word: &str) {
        let Some(key) = index_key(word) else {
            return;
        };
        self.buckets
            .entry(key)
            .or_default()
            .push(DictionaryWord::new(word));
        self.word_count += 1;
    }

    /// Words indexed under `key`, in input order. Empty if the key is absent.
    pub fn lookup(&self, key: char) -> &[DictionaryWord] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed words (duplicates included).
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word was indexed.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct keys.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<S: AsRef<str>> Extend<S> for DictionaryIndex {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.push(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for DictionaryIndex {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::build(iter)
    }
}
