//! # Token Indexer
//!
//! Owns a built [`WordIndexVocab`] and encodes token sequences into
//! fixed-width rows:
//!
//! ```text
//! prepend, append, seq_len = 6:   [START, a, b, c, STOP, MASK]
//! prepend, append, seq_len = 4:   [START, a, b, STOP]          (c overwritten)
//! append, seq_len = 3:            [a, b, STOP]                 (c overwritten)
//! ```
//!
//! Unseen tokens are assigned the next index as they are written; every
//! encode reports the words it added.

use crate::scanning::{ScanConfig, Scanner};
use crate::types::TokenType;
use crate::util::validators::resolve_seq_len;
use crate::vocab::markers::MarkerTokens;
use crate::vocab::word_vocab::WordIndexVocab;
use ndarray::Array2;

/// The result of [`TokenIndexer::extend_and_encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBatch<T: TokenType> {
    /// ``(sequences, seq_len)`` index matrix; unused positions hold the mask index.
    pub ids: Array2<T>,

    /// ``(word, token)`` pairs added to the vocabulary, in assignment order.
    pub added: Vec<(String, T)>,
}

impl<T: TokenType> EncodedBatch<T> {
    /// The row width.
    pub fn seq_len(&self) -> usize {
        self.ids.ncols()
    }
}

/// Exclusive owner of a growing vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIndexer<T: TokenType> {
    vocab: WordIndexVocab<T>,
    markers: MarkerTokens<T>,
    scanner: Scanner,
}

impl<T: TokenType> TokenIndexer<T> {
    /// Create a new indexer.
    ///
    /// `markers` must be resolved against `vocab`.
    pub fn new(
        vocab: WordIndexVocab<T>,
        markers: MarkerTokens<T>,
        scanner: Scanner,
    ) -> Self {
        Self {
            vocab,
            markers,
            scanner,
        }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &WordIndexVocab<T> {
        &self.vocab
    }

    /// Release the vocabulary.
    pub fn into_vocab(self) -> WordIndexVocab<T> {
        self.vocab
    }

    /// The reserved marker tokens.
    pub fn markers(&self) -> &MarkerTokens<T> {
        &self.markers
    }

    /// The scanner used for raw text.
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// The scanner configuration.
    pub fn scan_config(&self) -> &ScanConfig {
        self.scanner.config()
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.vocab.lookup_token(word)
    }

    /// Return the associated word for the token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.vocab.lookup_word(token)
    }

    /// Encode token sequences, extending the vocabulary with unseen tokens.
    ///
    /// # Arguments
    /// * `sequences` - token sequences, one per row.
    /// * `seq_len` - the row width; defaults to the longest sequence plus one
    ///   slot each for `prepend` and `append`.
    /// * `prepend` - write the start marker at position 0.
    /// * `append` - write the stop marker after the last content token, or
    ///   over it when the row is full.
    ///
    /// Tokens past the row width are dropped, and never enter the vocabulary.
    ///
    /// # Panics
    /// If an unseen token would be assigned an index that does not fit in `T`;
    /// pick `T` wide enough for the expected vocabulary growth.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, sequences)))]
    pub fn extend_and_encode<R, S>(
        &mut self,
        sequences: &[R],
        seq_len: Option<usize>,
        prepend: bool,
        append: bool,
    ) -> EncodedBatch<T>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let max_len = sequences
            .iter()
            .map(|seq| seq.as_ref().len())
            .max()
            .unwrap_or(0);
        let seq_len = resolve_seq_len(seq_len, max_len, prepend, append);

        let mut ids = Array2::from_elem((sequences.len(), seq_len), self.markers.mask);
        let mut added = Vec::new();

        if seq_len > 0 {
            let offset = prepend as usize;
            let window = seq_len - offset;

            for (seq, mut row) in sequences.iter().zip(ids.rows_mut()) {
                let seq = seq.as_ref();

                if prepend {
                    row[0] = self.markers.start;
                }

                let written = seq.len().min(window);
                for (pos, word) in seq[..written].iter().enumerate() {
                    let word = word.as_ref();
                    let (token, new) = self.vocab.get_or_insert(word);
                    if new {
                        added.push((word.to_string(), token));
                    }
                    row[offset + pos] = token;
                }

                if append {
                    row[(offset + written).min(seq_len - 1)] = self.markers.stop;
                }
            }
        }

        if !added.is_empty() {
            log::debug!(
                "encode added {} words; vocab size is now {}",
                added.len(),
                self.vocab.len()
            );
        }

        EncodedBatch { ids, added }
    }

    /// Scan raw texts, then [`Self::extend_and_encode`] the tokens.
    pub fn extend_and_encode_texts<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        seq_len: Option<usize>,
        prepend: bool,
        append: bool,
    ) -> EncodedBatch<T> {
        let sequences = self.scanner.tokenize_batch(texts);
        self.extend_and_encode(&sequences, seq_len, prepend, append)
    }

    /// Map a row of indices back to words, skipping mask positions.
    pub fn decode_row(
        &self,
        row: &[T],
    ) -> Vec<&str> {
        row.iter()
            .filter(|&&token| token != self.markers.mask)
            .filter_map(|&token| self.vocab.lookup_word(token))
            .collect()
    }
}
