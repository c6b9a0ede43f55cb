//! # Sentence Tokenizer

use crate::scanning::{ScanConfig, Scanner};
use crate::segmentation::sentence_config::SentenceConfig;
use crate::segmentation::sentence_segmentor::group_sentences;

/// Segments documents into sentences and scans each marker-wrapped sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceTokenizer {
    /// Sentence segmentation configuration.
    pub sentences: SentenceConfig,

    /// Scanner used on each wrapped sentence.
    pub scanner: Scanner,
}

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new(
        sentences: SentenceConfig,
        scan: ScanConfig,
    ) -> Self {
        Self {
            sentences,
            scanner: Scanner::new(scan),
        }
    }

    /// Split a document into sentences.
    pub fn group_sentences(
        &self,
        document: &str,
    ) -> Vec<String> {
        group_sentences(document, &self.sentences)
    }

    /// Split a document into sentences, and tokenize each sentence wrapped as
    /// `"{start} {sentence} {stop}"`.
    ///
    /// The result is ragged: one token list per sentence, in document order.
    pub fn tokenize_sentences(
        &self,
        document: &str,
        start_marker: &str,
        stop_marker: &str,
    ) -> Vec<Vec<String>> {
        self.group_sentences(document)
            .into_iter()
            .map(|sentence| {
                let wrapped = format!("{start_marker} {sentence} {stop_marker}");
                self.scanner.tokenize(&wrapped)
            })
            .collect()
    }
}

/// Tokenize each sentence of a document with the default scanner.
///
/// See [`SentenceTokenizer::tokenize_sentences`].
pub fn get_sent_arr(
    document: &str,
    start_marker: &str,
    stop_marker: &str,
    config: &SentenceConfig,
) -> Vec<Vec<String>> {
    SentenceTokenizer::new(config.clone(), ScanConfig::default()).tokenize_sentences(
        document,
        start_marker,
        stop_marker,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_sent_arr() {
        let arr = get_sent_arr(
            "Hi there. Dr. Who waves!",
            "<START>",
            "<STOP>",
            &SentenceConfig::default(),
        );

        assert_eq!(
            arr,
            vec![
                owned(&["<START>", "Hi", "there", ".", "<STOP>"]),
                owned(&["<START>", "Dr", ".", "Who", "waves", "!", "<STOP>"]),
            ]
        );
    }

    #[test]
    fn test_custom_scanner() {
        let tokenizer = SentenceTokenizer::new(
            SentenceConfig::default(),
            ScanConfig::default()
                .with_split_digits(true)
                .with_lowercase(true),
        );

        assert_eq!(
            tokenizer.tokenize_sentences("I turn 18. Wow.", "<s>", "<e>"),
            vec![
                owned(&["<s>", "i", "turn", "1", "8", ".", "<e>"]),
                owned(&["<s>", "wow", ".", "<e>"]),
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(get_sent_arr("", "<START>", "<STOP>", &SentenceConfig::default()).is_empty());
    }
}
