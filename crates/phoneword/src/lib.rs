//! Phone number to word translation.
//!
//! Every digit stands for a few letters (see [`phoneword_core::encoding`]).
//! Given a dictionary, a phone number is translated into every sequence of
//! dictionary words and single leftover digits that encodes it, never with
//! two leftover digits side by side.
//!
//! ```
//! use phoneword::Translator;
//!
//! let translator = Translator::new(["Tor", "mir", "Mix"]);
//! let translation = translator.translate("5624-82");
//! assert_eq!(translation.results(), ["mir Tor", "Mix Tor"]);
//! ```
//!
//! # Architecture
//!
//! - [`dictionary`] -- Dictionary words grouped by first-letter key
//! - [`matcher`] -- Whole-word matching against the head of a digit string
//! - [`search`] -- Exhaustive backtracking search
//! - [`translator`] -- Top-level handle, options and formatted results
//! - [`source`] -- Line-oriented dictionary and phone number sources
//! - [`observer`] -- Optional diagnostics hooks
//! - [`sample`] -- Built-in demonstration data

pub mod dictionary;
pub mod matcher;
pub mod observer;
pub mod sample;
pub mod search;
pub mod source;
pub mod translator;

pub use dictionary::{DictionaryIndex, DictionaryWord};
pub use observer::{LogObserver, TranslationObserver};
pub use search::{ResultSet, SearchEngine, translate};
pub use source::SourceError;
pub use translator::{Translation, Translator, TranslatorOptions};
