// Translator: top-level handle for phone number translation
//
// Owns the dictionary index built at construction time, an optional observer
// and the translation options. The index is never mutated afterwards, so a
// `Translator` can be shared by reference across threads.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use phoneword_core::TokenChain;

use crate::dictionary::DictionaryIndex;
use crate::observer::TranslationObserver;
use crate::search::SearchEngine;
use crate::source::{self, SourceError};

/// Options applied by [`Translator::translate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Cap on the number of translations returned per phone number.
    /// `None` returns all of them. The search itself is always exhaustive.
    pub max_results: Option<usize>,
}

/// All translations of one phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    phone_number: String,
    chains: Vec<TokenChain>,
}

impl Translation {
    /// The phone number as supplied, separators included.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Terminal token chains in discovery order.
    pub fn chains(&self) -> &[TokenChain] {
        &self.chains
    }

    /// Rendered translations, e.g. `"so 1 Tor"`.
    pub fn results(&self) -> Vec<String> {
        self.chains.iter().map(TokenChain::render).collect()
    }

    /// Display lines: `"{phone_number}: {translation}"` per translation.
    pub fn lines(&self) -> Vec<String> {
        self.chains
            .iter()
            .map(|c| format!("{}: {}", self.phone_number, c))
            .collect()
    }

    /// Number of translations.
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the number could not be translated at all.
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Translates phone numbers into words from a fixed dictionary.
pub struct Translator {
    index: DictionaryIndex,
    observer: Option<Arc<dyn TranslationObserver>>,
    options: TranslatorOptions,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("words", &self.index.len())
            .field("has_observer", &self.observer.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl Translator {
    /// Build a translator from an ordered word list.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_index(DictionaryIndex::build(words))
    }

    /// Wrap an already built index.
    pub fn from_index(index: DictionaryIndex) -> Self {
        info!(
            "dictionary indexed: {} words under {} keys",
            index.len(),
            index.bucket_count()
        );
        Self {
            index,
            observer: None,
            options: TranslatorOptions::default(),
        }
    }

    /// Build a translator from a dictionary file (one word per line).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let words = source::load_dictionary(path)?;
        Ok(Self::new(words))
    }

    /// Like [`from_path`](Self::from_path), reporting a load failure to
    /// `observer` and attaching it to the translator on success.
    pub fn from_path_observed(
        path: impl AsRef<Path>,
        observer: Arc<dyn TranslationObserver>,
    ) -> Result<Self, SourceError> {
        match source::load_dictionary(path) {
            Ok(words) => Ok(Self::new(words).with_observer(observer)),
            Err(e) => {
                observer.load_failed(&e);
                Err(e)
            }
        }
    }

    /// Attach an observer notified of every translation found.
    pub fn with_observer(mut self, observer: Arc<dyn TranslationObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Cap the number of translations returned per phone number.
    pub fn set_max_results(&mut self, value: Option<usize>) {
        self.options.max_results = value;
    }

    /// Translate one phone number.
    ///
    /// An untranslatable number yields an empty [`Translation`]; this is a
    /// normal outcome, not an error.
    pub fn translate(&self, phone_number: &str) -> Translation {
        debug!("processing phone number '{phone_number}'");
        let engine = SearchEngine::new(&self.index);
        let mut chains = match &self.observer {
            Some(observer) => engine.translate_with(phone_number, |chain| {
                observer.translation_found(phone_number, chain)
            }),
            None => engine.translate(phone_number),
        };
        if let Some(max) = self.options.max_results {
            chains.truncate(max);
        }
        debug!("'{phone_number}': {} translation(s)", chains.len());
        Translation {
            phone_number: phone_number.to_string(),
            chains,
        }
    }

    /// Translate several phone numbers, in order.
    pub fn translate_all<I, S>(&self, phone_numbers: I) -> Vec<Translation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phone_numbers
            .into_iter()
            .map(|n| self.translate(n.as_ref()))
            .collect()
    }

    /// Translate every phone number listed in a file (one per line).
    pub fn translate_file(&self, path: impl AsRef<Path>) -> Result<Vec<Translation>, SourceError> {
        match source::load_phone_numbers(path) {
            Ok(numbers) => Ok(self.translate_all(numbers)),
            Err(e) => {
                if let Some(observer) = &self.observer {
                    observer.load_failed(&e);
                }
                Err(e)
            }
        }
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    #[test]
    fn translate_renders_lines() {
        let t = Translator::new(["Tor", "mir", "Mix"]);
        let tr = t.translate("5624-82");
        assert_eq!(tr.phone_number(), "5624-82");
        assert_eq!(tr.results(), ["mir Tor", "Mix Tor"]);
        assert_eq!(tr.lines(), ["5624-82: mir Tor", "5624-82: Mix Tor"]);
        assert_eq!(tr.to_string(), "5624-82: mir Tor\n5624-82: Mix Tor");
    }

    #[test]
    fn untranslatable_is_empty_not_error() {
        let t = Translator::new(["Tor"]);
        let tr = t.translate("12a34");
        assert!(tr.is_empty());
        assert_eq!(tr.to_string(), "");
    }

    #[test]
    fn max_results_truncates_after_search() {
        let mut t = Translator::new(["Torf", "fort", "Tor"]);
        t.set_max_results(Some(2));
        assert_eq!(t.translate("04824").results(), ["0 fort", "0 Torf"]);
        t.set_max_results(None);
        assert_eq!(t.translate("04824").len(), 3);
    }

    #[test]
    fn observer_sees_every_translation() {
        let rec = Arc::new(RecordingObserver::new());
        let t = Translator::new(["Tor", "so"]).with_observer(rec.clone());
        t.translate("381482");
        assert_eq!(
            rec.translations(),
            [("381482".to_string(), "so 1 Tor".to_string())]
        );
    }

    #[test]
    fn observer_does_not_change_results() {
        let plain = Translator::new(["Torf", "fort", "Tor"]);
        let observed = Translator::new(["Torf", "fort", "Tor"])
            .with_observer(Arc::new(RecordingObserver::new()));
        assert_eq!(plain.translate("04824"), observed.translate("04824"));
    }

    #[test]
    fn from_path_missing_file() {
        let rec = Arc::new(RecordingObserver::new());
        let result = Translator::from_path_observed("/nonexistent/dict.txt", rec.clone());
        assert!(result.is_err());
        assert_eq!(rec.failures().len(), 1);
    }

    #[test]
    fn translate_file_missing_keeps_translator_usable() {
        let rec = Arc::new(RecordingObserver::new());
        let t = Translator::new(["Tor"]).with_observer(rec.clone());
        assert!(t.translate_file("/nonexistent/numbers.txt").is_err());
        assert_eq!(rec.failures().len(), 1);
        assert_eq!(t.translate("4824").results(), ["Tor 4"]);
    }

    #[test]
    fn translator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
        assert_send_sync::<Translation>();
    }

    #[test]
    fn get_version_returns_cargo_version() {
        assert_eq!(Translator::get_version(), env!("CARGO_PKG_VERSION"));
    }
}
