//! # Vocab Builder

use crate::scanning::{ScanConfig, Scanner};
use crate::types::TokenType;
use crate::util::validators;
use crate::vocab::corpus::{CorpusSide, CorpusSource};
use crate::vocab::indexer::TokenIndexer;
use crate::vocab::markers::MarkerConfig;
use crate::vocab::word_vocab::WordIndexVocab;
use anyhow::Context;
use ndarray::Array2;

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone)]
pub struct VocabBuilderOptions {
    /// Scanner configuration for raw corpora and extra strings.
    pub scan: ScanConfig,

    /// Reserved marker words.
    pub markers: MarkerConfig,

    /// Words, in index order, to seed the vocabulary with.
    ///
    /// Must start with the mask word.
    pub base_words: Option<Vec<String>>,

    /// The X corpus.
    pub x: CorpusSource,

    /// The Y corpus.
    pub y: CorpusSource,

    /// Explicit X row width.
    pub x_seq_len: Option<usize>,

    /// Explicit Y row width.
    pub y_seq_len: Option<usize>,

    /// Write the start marker at the head of each row.
    pub prepend: bool,

    /// Write the stop marker after the content of each row.
    pub append: bool,

    /// Encode the corpora at build time.
    pub index: bool,

    /// Words added verbatim.
    pub extra_words: Vec<String>,

    /// Strings whose tokens are added.
    pub extra_strings: Vec<String>,

    /// Scan raw corpora in parallel.
    pub parallel: bool,
}

impl Default for VocabBuilderOptions {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            markers: MarkerConfig::default(),
            base_words: None,
            x: CorpusSource::default(),
            y: CorpusSource::default(),
            x_seq_len: None,
            y_seq_len: None,
            prepend: true,
            append: true,
            index: true,
            extra_words: Vec::new(),
            extra_strings: Vec::new(),
            parallel: crate::DEFAULT_PARALLEL,
        }
    }
}

impl VocabBuilderOptions {
    /// Sets the scanner configuration.
    pub fn with_scan_config(
        self,
        scan: ScanConfig,
    ) -> Self {
        Self { scan, ..self }
    }

    /// Sets digit splitting on the scanner configuration.
    ///
    /// Also selects the seeded digit words: ``"0".."9"`` when splitting,
    /// ``"0".."99"`` otherwise.
    pub fn with_split_digits(
        self,
        split_digits: bool,
    ) -> Self {
        Self {
            scan: self.scan.with_split_digits(split_digits),
            ..self
        }
    }

    /// Sets the reserved marker words.
    pub fn with_markers(
        self,
        markers: MarkerConfig,
    ) -> Self {
        Self { markers, ..self }
    }

    /// Seed from an existing vocabulary.
    pub fn with_vocab<T: TokenType>(
        self,
        vocab: &WordIndexVocab<T>,
    ) -> Self {
        Self {
            base_words: Some(vocab.idx2word().to_vec()),
            ..self
        }
    }

    /// Sets the raw X corpus.
    pub fn with_x_strings<I, S>(
        self,
        strings: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            x: self.x.with_strings(strings),
            ..self
        }
    }

    /// Sets the pre-tokenized X corpus.
    pub fn with_x_tokens<I, R, S>(
        self,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            x: self.x.with_tokens(tokens),
            ..self
        }
    }

    /// Sets the raw Y corpus.
    pub fn with_y_strings<I, S>(
        self,
        strings: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self {
            y: self.y.with_strings(strings),
            ..self
        }
    }

    /// Sets the pre-tokenized Y corpus.
    pub fn with_y_tokens<I, R, S>(
        self,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            y: self.y.with_tokens(tokens),
            ..self
        }
    }

    /// Sets the explicit X row width.
    pub fn with_x_seq_len(
        self,
        x_seq_len: Option<usize>,
    ) -> Self {
        Self { x_seq_len, ..self }
    }

    /// Sets the explicit Y row width.
    pub fn with_y_seq_len(
        self,
        y_seq_len: Option<usize>,
    ) -> Self {
        Self { y_seq_len, ..self }
    }

    /// Sets start marker prepending.
    pub fn with_prepend(
        self,
        prepend: bool,
    ) -> Self {
        Self { prepend, ..self }
    }

    /// Sets stop marker appending.
    pub fn with_append(
        self,
        append: bool,
    ) -> Self {
        Self { append, ..self }
    }

    /// Sets build-time encoding of the corpora.
    pub fn with_indexing(
        self,
        index: bool,
    ) -> Self {
        Self { index, ..self }
    }

    /// Sets the words added verbatim.
    pub fn with_extra_words<I, S>(
        self,
        words: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_words: words.into_iter().map(|s| s.as_ref().to_string()).collect(),
            ..self
        }
    }

    /// Sets the strings whose tokens are added.
    pub fn with_extra_strings<I, S>(
        self,
        strings: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_strings: strings.into_iter().map(|s| s.as_ref().to_string()).collect(),
            ..self
        }
    }

    /// Sets parallel scanning of raw corpora.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Check every option for consistency.
    pub fn try_validate(&self) -> anyhow::Result<()> {
        self.x.try_validate(CorpusSide::X)?;
        self.y.try_validate(CorpusSide::Y)?;
        self.scan.try_validate()?;
        validators::try_parallel(self.parallel)?;
        Ok(())
    }

    /// Initializes a [`VocabBuilder`] from these options.
    pub fn init(self) -> VocabBuilder {
        VocabBuilder::init(self)
    }
}

/// The digit words seeded into every vocabulary.
pub fn digit_words(split_digits: bool) -> impl Iterator<Item = String> {
    let n = if split_digits { 10 } else { 100 };
    (0..n).map(|d: u32| d.to_string())
}

/// A build corpus resolved into tokens, and optionally encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusIndex<T: TokenType> {
    /// The corpus side.
    pub side: CorpusSide,

    /// The token sequences.
    pub tokens: Vec<Vec<String>>,

    /// The longest token sequence.
    pub max_len: usize,

    /// The row width.
    pub seq_len: usize,

    /// The encoded rows, when indexing is enabled.
    pub ids: Option<Array2<T>>,
}

/// The results of [`VocabBuilder::build`].
#[derive(Debug, Clone)]
pub struct BuildResults<T: TokenType> {
    /// The indexer, owning the vocabulary.
    pub indexer: TokenIndexer<T>,

    /// The X corpus, if one was supplied.
    pub x: Option<CorpusIndex<T>>,

    /// The Y corpus, if one was supplied.
    pub y: Option<CorpusIndex<T>>,
}

/// Builder for word index vocabularies.
pub struct VocabBuilder {
    /// Builder options.
    pub options: VocabBuilderOptions,
}

impl VocabBuilder {
    /// Initializes a [`VocabBuilder`].
    pub fn init(options: VocabBuilderOptions) -> Self {
        Self { options }
    }

    /// Builds the vocabulary.
    ///
    /// The vocabulary is seeded in order with:
    /// * the base words, or the mask word alone,
    /// * the digit words,
    /// * the extra words,
    /// * the tokens of the extra strings,
    /// * any missing start, stop, and init markers,
    /// * the corpus tokens, X before Y, in order of first occurrence.
    ///
    /// # Parameters
    /// * `T` - the [`TokenType`] of the built vocab.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build<T: TokenType>(self) -> anyhow::Result<BuildResults<T>> {
        self.options.try_validate()?;

        let VocabBuilderOptions {
            scan,
            markers,
            base_words,
            x,
            y,
            x_seq_len,
            y_seq_len,
            prepend,
            append,
            index,
            extra_words,
            extra_strings,
            parallel,
        } = self.options;

        let mut vocab = match base_words {
            Some(words) => {
                let vocab = WordIndexVocab::<T>::from_words(words).context("invalid base vocabulary")?;
                markers.try_check_mask(&vocab)?;
                vocab
            }
            None => WordIndexVocab::with_mask(&markers.mask),
        };

        vocab.extend_words(digit_words(scan.split_digits));
        vocab.extend_words(&extra_words);

        let scanner = Scanner::new(scan);
        for s in &extra_strings {
            vocab.extend_words(scanner.tokenize(s));
        }

        let marker_tokens = markers.resolve(&mut vocab)?;
        log::info!("Seeded vocabulary with {} words", vocab.len());

        let mut corpora = Vec::new();
        for (side, source, seq_len) in [(CorpusSide::X, x, x_seq_len), (CorpusSide::Y, y, y_seq_len)] {
            let Some(tokens) = source.try_into_tokens(side, &scanner, parallel)? else {
                continue;
            };

            for seq in &tokens {
                vocab.extend_words(seq);
            }

            let max_len = tokens.iter().map(Vec::len).max().unwrap_or(0);
            let seq_len = validators::resolve_seq_len(seq_len, max_len, prepend, append);
            log::info!(
                "Corpus {side}: {} sequences, max length {max_len}, seq_len {seq_len}",
                tokens.len()
            );

            corpora.push(CorpusIndex {
                side,
                tokens,
                max_len,
                seq_len,
                ids: None,
            });
        }
        log::info!("Built vocabulary with {} words", vocab.len());

        let mut indexer = TokenIndexer::new(vocab, marker_tokens, scanner);

        if index {
            for corpus in &mut corpora {
                let batch = indexer.extend_and_encode(&corpus.tokens, Some(corpus.seq_len), prepend, append);
                debug_assert!(batch.added.is_empty());
                corpus.ids = Some(batch.ids);
            }
        }

        let mut x = None;
        let mut y = None;
        for corpus in corpora {
            match corpus.side {
                CorpusSide::X => x = Some(corpus),
                CorpusSide::Y => y = Some(corpus),
            }
        }

        Ok(BuildResults { indexer, x, y })
    }
}
