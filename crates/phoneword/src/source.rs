// Line-oriented text sources for dictionaries and phone numbers
//
// One entry per line. Blank lines are skipped; nothing else is validated.
// Failures are reported to the caller; they never touch an index that was
// built earlier, because loading always produces a fresh value.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

/// What a source was supposed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Dictionary,
    PhoneNumbers,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Dictionary => f.write_str("dictionary"),
            SourceKind::PhoneNumbers => f.write_str("phone number"),
        }
    }
}

/// Error type for reading external text sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source could not be opened or read.
    #[error("error reading {kind} file '{}': {source}", .path.display())]
    Io {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an in-memory or stream source failed.
    #[error("error reading {kind} input: {source}")]
    Stream {
        kind: SourceKind,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Which kind of source failed.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceError::Io { kind, .. } | SourceError::Stream { kind, .. } => *kind,
        }
    }
}

/// Read non-blank lines from `reader`, with line terminators removed.
///
/// Lines are otherwise kept verbatim: dictionary entries may legitimately
/// contain punctuation.
pub fn read_lines<R: BufRead>(reader: R, kind: SourceKind) -> Result<Vec<String>, SourceError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| SourceError::Stream { kind, source })?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read dictionary words, one per line.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    read_lines(reader, SourceKind::Dictionary)
}

/// Read phone numbers, one per line.
pub fn read_phone_numbers<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    read_lines(reader, SourceKind::PhoneNumbers)
}

/// Load dictionary words from a file.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    load_file(path.as_ref(), SourceKind::Dictionary)
}

/// Load phone numbers from a file.
pub fn load_phone_numbers(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    load_file(path.as_ref(), SourceKind::PhoneNumbers)
}

fn load_file(path: &Path, kind: SourceKind) -> Result<Vec<String>, SourceError> {
    debug!("reading {kind} file '{}'", path.display());
    File::open(path)
        .map_err(|source| SourceError::Io {
            kind,
            path: path.to_path_buf(),
            source,
        })
        .and_then(|file| {
            read_lines(BufReader::new(file), kind).map_err(|e| match e {
                SourceError::Stream { kind, source } => SourceError::Io {
                    kind,
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })
        })
}
