//! # Rule-Based Text Tokenizer
//!
//! Converts raw text into flat token sequences and sentence lists, and indexes
//! token sequences into fixed-width integer arrays.
//!
//! * [`scanning`] - the character class scanner; see [`scanning::tokenize`].
//! * [`segmentation`] - heuristic sentence splitting; see
//!   [`segmentation::group_sentences`] and [`segmentation::get_sent_arr`].
//! * [`vocab`] - the word index vocabulary, its builder, and the indexer.
//!
//! # Indexing Example
//!
//! ```rust,ignore
//! let BuildResults::<u32> { mut indexer, x, .. } = VocabBuilderOptions::default()
//!     .with_split_digits(true)
//!     .with_x_strings(["hello there", "general kenobi"])
//!     .with_indexing(true)
//!     .init()
//!     .build()?;
//!
//! let batch = indexer.extend_and_encode_texts(&["hello kenobi"], None, true, true);
//! assert!(batch.added.is_empty());
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod scanning;
pub mod segmentation;
pub mod types;
pub mod util;
pub mod vocab;

pub use errors::SentokError;
pub use scanning::{ScanConfig, Scanner, tokenize};
pub use segmentation::{SentenceConfig, SentenceTokenizer, check_if_title, get_sent_arr, group_sentences};
pub use vocab::{BuildResults, EncodedBatch, TokenIndexer, VocabBuilder, VocabBuilderOptions, WordIndexVocab};

/// Default value for parallel processing; based on the `rayon` feature.
#[cfg(feature = "rayon")]
pub const DEFAULT_PARALLEL: bool = true;
#[cfg(not(feature = "rayon"))]
pub const DEFAULT_PARALLEL: bool = false;
