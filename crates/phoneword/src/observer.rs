// Optional hooks for diagnostics
//
// Observers are never required for correctness. A `Translator` without an
// observer behaves identically, apart from not reporting anything.

use std::sync::Mutex;

use phoneword_core::TokenChain;

use crate::source::SourceError;

/// Receives notifications from a [`Translator`](crate::translator::Translator).
///
/// Load failures are reported by the translator's file-backed constructors
/// and [`translate_file`](crate::translator::Translator::translate_file); the
/// plain `source` functions only return the error.
///
/// All methods default to doing nothing.
pub trait TranslationObserver: Send + Sync {
    /// Called for every terminal translation, in discovery order.
    fn translation_found(&self, _phone_number: &str, _chain: &TokenChain) {}

    /// Called when reading a dictionary or phone number source fails.
    fn load_failed(&self, _error: &SourceError) {}
}

/// Observer that forwards every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TranslationObserver for LogObserver {
    fn translation_found(&self, phone_number: &str, chain: &TokenChain) {
        log::info!("translation found for '{phone_number}': '{chain}'");
    }

    fn load_failed(&self, error: &SourceError) {
        log::error!("{error}");
    }
}

/// Observer that records every event, mostly useful in tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    translations: Mutex<Vec<(String, String)>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(phone_number, rendered_translation)` pairs.
    pub fn translations(&self) -> Vec<(String, String)> {
        self.translations
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Recorded load failure messages.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl TranslationObserver for RecordingObserver {
    fn translation_found(&self, phone_number: &str, chain: &TokenChain) {
        if let Ok(mut v) = self.translations.lock() {
            v.push((phone_number.to_string(), chain.render()));
        }
    }

    fn load_failed(&self, error: &SourceError) {
        if let Ok(mut v) = self.failures.lock() {
            v.push(error.to_string());
        }
    }
}
