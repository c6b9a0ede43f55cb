//! # Vocabulary
//!
//! * [`WordIndexVocab`] - the append-only ``{ word <-> index }`` bijection.
//! * [`VocabBuilder`] - seeds and grows a vocabulary from corpora.
//! * [`TokenIndexer`] - encodes token sequences into fixed-width rows.

pub mod builder;
pub mod corpus;
pub mod indexer;
pub mod io;
pub mod markers;
pub mod word_vocab;

pub use builder::{BuildResults, CorpusIndex, VocabBuilder, VocabBuilderOptions};
pub use corpus::{CorpusSide, CorpusSource};
pub use indexer::{EncodedBatch, TokenIndexer};
pub use markers::{MarkerConfig, MarkerTokens};
pub use word_vocab::WordIndexVocab;
