//! # Build Corpora

use crate::errors::SentokError;
use crate::scanning::Scanner;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Which corpus a source feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorpusSide {
    /// Model inputs.
    X,

    /// Model targets.
    Y,
}

impl Display for CorpusSide {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            CorpusSide::X => write!(f, "X"),
            CorpusSide::Y => write!(f, "Y"),
        }
    }
}

/// A corpus given either as raw strings or as pre-tokenized sequences.
///
/// Raw entries are held as bytes; an entry that is not valid UTF-8 fails
/// tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSource {
    /// Raw entries, scanned at build time.
    pub strings: Option<Vec<Vec<u8>>>,

    /// Pre-tokenized entries.
    pub tokens: Option<Vec<Vec<String>>>,
}

impl CorpusSource {
    /// Returns `true` if neither form was supplied.
    pub fn is_empty(&self) -> bool {
        self.strings.is_none() && self.tokens.is_none()
    }

    /// Set the raw entries.
    pub fn with_strings<I, S>(
        self,
        strings: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            strings: Some(strings.into_iter().map(|s| s.as_ref().to_vec()).collect()),
            ..self
        }
    }

    /// Set the pre-tokenized entries.
    pub fn with_tokens<I, R, S>(
        self,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: Some(
                tokens
                    .into_iter()
                    .map(|row| row.into_iter().map(|s| s.as_ref().to_string()).collect())
                    .collect(),
            ),
            ..self
        }
    }

    /// Reject a source holding both forms.
    pub fn try_validate(
        &self,
        side: CorpusSide,
    ) -> Result<(), SentokError> {
        if self.strings.is_some() && self.tokens.is_some() {
            return Err(SentokError::ConflictingCorpus { side });
        }
        Ok(())
    }

    /// Resolve the source into token sequences.
    ///
    /// Returns `None` for an empty source.
    pub fn try_into_tokens(
        self,
        side: CorpusSide,
        scanner: &Scanner,
        parallel: bool,
    ) -> Result<Option<Vec<Vec<String>>>, SentokError> {
        self.try_validate(side)?;
        match (self.strings, self.tokens) {
            (Some(strings), None) => scan_entries(side, &strings, scanner, parallel).map(Some),
            (None, tokens) => Ok(tokens),
            (Some(_), Some(_)) => Err(SentokError::ConflictingCorpus { side }),
        }
    }
}

fn scan_entry(
    side: CorpusSide,
    index: usize,
    entry: &[u8],
    scanner: &Scanner,
) -> Result<Vec<String>, SentokError> {
    match std::str::from_utf8(entry) {
        Ok(text) => Ok(scanner.tokenize(text)),
        Err(_) => Err(SentokError::Tokenization {
            side,
            index,
            content: String::from_utf8_lossy(entry).into_owned(),
        }),
    }
}

/// Scan every entry; the first failing entry, by index, is reported.
fn scan_entries(
    side: CorpusSide,
    entries: &[Vec<u8>],
    scanner: &Scanner,
    parallel: bool,
) -> Result<Vec<Vec<String>>, SentokError> {
    let results = if parallel {
        par_scan_entries(side, entries, scanner)
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| scan_entry(side, index, entry, scanner))
            .collect()
    };

    results.into_iter().collect()
}

#[cfg(feature = "rayon")]
fn par_scan_entries(
    side: CorpusSide,
    entries: &[Vec<u8>],
    scanner: &Scanner,
) -> Vec<Result<Vec<String>, SentokError>> {
    use rayon::prelude::*;
    entries
        .par_iter()
        .enumerate()
        .map(|(index, entry)| scan_entry(side, index, entry, scanner))
        .collect()
}

/// Without `rayon`, `parallel` is rejected by option validation; scan serially.
#[cfg(not(feature = "rayon"))]
fn par_scan_entries(
    side: CorpusSide,
    entries: &[Vec<u8>],
    scanner: &Scanner,
) -> Vec<Result<Vec<String>, SentokError>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| scan_entry(side, index, entry, scanner))
        .collect()
}
