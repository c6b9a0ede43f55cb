//! # Sentence Segmentation Configuration
use crate::util::LookupList;
use serde::{Deserialize, Serialize};

/// The default terminal delimiters.
pub const DEFAULT_TERMINALS: [char; 3] = ['.', '!', '?'];

/// The default title abbreviations.
pub const DEFAULT_TITLES: [&str; 5] = ["dr", "mr", "mrs", "ms", "prof"];

/// Terminal Delimiter + Title Segmentor Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceConfig {
    /// Characters which may end a sentence.
    pub terminals: LookupList<char>,

    /// Lowercase title abbreviations which never end a sentence.
    pub titles: LookupList<String>,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            terminals: DEFAULT_TERMINALS.into_iter().collect(),
            titles: DEFAULT_TITLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SentenceConfig {
    /// Replace the terminal delimiters.
    pub fn with_terminals<I>(
        self,
        terminals: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            terminals: terminals.into_iter().collect(),
            ..self
        }
    }

    /// Replace the titles; they are stored lowercased.
    pub fn with_titles<I, S>(
        self,
        titles: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            titles: titles
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
            ..self
        }
    }

    /// Add a title.
    pub fn add_title(
        &mut self,
        title: &str,
    ) {
        self.titles.insert(title.trim().to_lowercase());
    }

    /// Is `c` a terminal delimiter?
    pub fn is_terminal(
        &self,
        c: char,
    ) -> bool {
        self.terminals.contains(&c)
    }
}
