//! # Error Types

use crate::vocab::corpus::CorpusSide;

/// Fatal conditions raised while configuring or building a vocabulary.
///
/// Public entry points return [`anyhow::Result`]; these errors can be recovered
/// from it with [`anyhow::Error::downcast_ref`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SentokError {
    /// Both a raw and a pre-tokenized corpus were supplied for one side.
    #[error("corpus {side}: raw strings and pre-tokenized sequences are mutually exclusive")]
    ConflictingCorpus {
        /// The offending corpus side.
        side: CorpusSide,
    },

    /// A raw corpus entry could not be scanned.
    #[error("corpus {side}: failed to tokenize entry {index}: {content:?}")]
    Tokenization {
        /// The corpus side.
        side: CorpusSide,
        /// The entry index within the corpus.
        index: usize,
        /// Lossy rendering of the entry.
        content: String,
    },

    /// The scanner configuration is inconsistent.
    #[error("invalid scan config: {0}")]
    InvalidScanConfig(String),

    /// A supplied word index map is not a dense bijection rooted at the mask.
    #[error("invalid vocabulary: {0}")]
    InvalidVocab(String),
}
