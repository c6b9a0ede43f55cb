//! # Scanner Configuration
use crate::errors::SentokError;
use crate::util::LookupList;
use serde::{Deserialize, Serialize};

/// The default delimiter set.
pub const DEFAULT_DELIMITERS: [char; 1] = [' '];

/// The default special token set.
pub const DEFAULT_SPECIALS: [&str; 1] = ["\\newline"];

/// Delimiter + Special Token Scanner Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Characters that separate tokens and are never emitted.
    pub delimiters: LookupList<char>,

    /// Strings emitted atomically once the scan buffer equals them.
    pub specials: LookupList<String>,

    /// Split all-digit runs into single-digit tokens.
    pub split_digits: bool,

    /// Lowercase flushed (non-special) tokens.
    pub lowercase: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.into_iter().collect(),
            specials: DEFAULT_SPECIALS.iter().map(|s| s.to_string()).collect(),
            split_digits: false,
            lowercase: false,
        }
    }
}

impl ScanConfig {
    /// A configuration with no delimiters and no special tokens.
    pub fn empty() -> Self {
        Self {
            delimiters: LookupList::default(),
            specials: LookupList::default(),
            split_digits: false,
            lowercase: false,
        }
    }

    /// Replace the delimiter set.
    pub fn with_delimiters<I>(
        self,
        delimiters: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            delimiters: delimiters.into_iter().collect(),
            ..self
        }
    }

    /// Replace the special token set.
    pub fn with_specials<I, S>(
        self,
        specials: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            specials: specials
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            ..self
        }
    }

    /// Add a special token.
    pub fn add_special(
        &mut self,
        special: &str,
    ) {
        self.specials.insert(special.to_string());
    }

    /// Set digit splitting.
    pub fn with_split_digits(
        self,
        split_digits: bool,
    ) -> Self {
        Self {
            split_digits,
            ..self
        }
    }

    /// Set lowercasing.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Is `c` a delimiter?
    pub fn is_delimiter(
        &self,
        c: char,
    ) -> bool {
        self.delimiters.contains(&c)
    }

    /// Is `s` a special token?
    pub fn is_special(
        &self,
        s: &str,
    ) -> bool {
        self.specials.contains(s)
    }

    /// Check that every special token is non-empty and delimiter free.
    ///
    /// A special token containing a delimiter can never be matched, since the
    /// delimiter always flushes the buffer first.
    pub fn try_validate(&self) -> Result<(), SentokError> {
        for special in &self.specials {
            if special.is_empty() {
                return Err(SentokError::InvalidScanConfig(
                    "special tokens must be non-empty".to_string(),
                ));
            }
            if let Some(c) = special.chars().find(|&c| self.is_delimiter(c)) {
                return Err(SentokError::InvalidScanConfig(format!(
                    "special token {special:?} contains delimiter {c:?}"
                )));
            }
        }
        Ok(())
    }
}
