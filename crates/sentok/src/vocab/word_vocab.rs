//! # Word Index ``{ String <-> T }`` Vocabulary

use crate::errors::SentokError;
use crate::types::{TokenType, WordToTokenMap, index_from_token, token_from_index};
use serde::{Deserialize, Serialize};

/// Append-only bijection between words and dense indices ``0..len``.
///
/// Indices are assigned in insertion order and never change or get reused.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: TokenType", deserialize = "T: TokenType"))]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordIndexVocab<T: TokenType> {
    /// Map of ``{ word -> T }``.
    word2idx: WordToTokenMap<T>,

    /// Words in index order.
    idx2word: Vec<String>,
}

impl<T: TokenType> TryFrom<Vec<String>> for WordIndexVocab<T> {
    type Error = SentokError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}

impl<T: TokenType> From<WordIndexVocab<T>> for Vec<String> {
    fn from(vocab: WordIndexVocab<T>) -> Self {
        vocab.idx2word
    }
}

impl<T: TokenType> WordIndexVocab<T> {
    /// Create a vocabulary holding only `mask`, at index 0.
    pub fn with_mask(mask: &str) -> Self {
        let mut vocab = Self::default();
        vocab.add_word(mask);
        vocab
    }

    /// Build a vocabulary from words in index order.
    ///
    /// Duplicate words are rejected.
    pub fn from_words<I, S>(words: I) -> Result<Self, SentokError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for word in words {
            let word = word.as_ref();
            if !vocab.get_or_insert(word).1 {
                return Err(SentokError::InvalidVocab(format!(
                    "duplicate word {word:?}"
                )));
            }
        }
        Ok(vocab)
    }

    /// Build a vocabulary from a ``{ word -> T }`` map.
    ///
    /// The indices must be exactly ``0..map.len()``.
    pub fn from_word_map(word2idx: WordToTokenMap<T>) -> Result<Self, SentokError> {
        let mut slots: Vec<Option<String>> = vec![None; word2idx.len()];
        for (word, &token) in &word2idx {
            let idx = index_from_token(token);
            let Some(slot) = slots.get_mut(idx) else {
                return Err(SentokError::InvalidVocab(format!(
                    "index {idx} of {word:?} is outside 0..{}",
                    word2idx.len()
                )));
            };
            if let Some(other) = slot {
                return Err(SentokError::InvalidVocab(format!(
                    "index {idx} is shared by {other:?} and {word:?}"
                )));
            }
            *slot = Some(word.clone());
        }

        let idx2word = slots.into_iter().flatten().collect();
        Ok(Self { word2idx, idx2word })
    }

    /// Shrinks the capacity of the underlying data structures to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.word2idx.shrink_to_fit();
        self.idx2word.shrink_to_fit();
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.idx2word.len()
    }

    /// Returns `true` if the vocabulary contains no words.
    pub fn is_empty(&self) -> bool {
        self.idx2word.is_empty()
    }

    /// The index the next new word will be assigned.
    pub fn next_token(&self) -> T {
        token_from_index(self.len())
    }

    /// Returns `true` if `word` has an index.
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word2idx.contains_key(word)
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word2idx.get(word).copied()
    }

    /// Return the associated word for the token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        self.idx2word
            .get(index_from_token(token))
            .map(String::as_str)
    }

    /// Look up `word`, assigning it the next index if it is new.
    ///
    /// Returns the token and whether it was newly assigned.
    ///
    /// # Panics
    /// If `word` is new and the next index does not fit in `T`.
    pub fn get_or_insert(
        &mut self,
        word: &str,
    ) -> (T, bool) {
        if let Some(token) = self.lookup_token(word) {
            return (token, false);
        }
        let token = self.next_token();
        self.word2idx.insert(word.to_string(), token);
        self.idx2word.push(word.to_string());
        (token, true)
    }

    /// Add a word to the vocab, returning its token.
    pub fn add_word(
        &mut self,
        word: &str,
    ) -> T {
        self.get_or_insert(word).0
    }

    /// Add each word not yet present, in iteration order.
    ///
    /// Returns the newly assigned ``(word, token)`` pairs.
    pub fn extend_words<I, S>(
        &mut self,
        words: I,
    ) -> Vec<(String, T)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = Vec::new();
        for word in words {
            let word = word.as_ref();
            if let (token, true) = self.get_or_insert(word) {
                added.push((word.to_string(), token));
            }
        }
        added
    }

    /// Iterate ``(token, word)`` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.idx2word
            .iter()
            .enumerate()
            .map(|(idx, word)| (token_from_index(idx), word.as_str()))
    }

    /// The ``{ word -> T }`` map.
    pub fn word2idx(&self) -> &WordToTokenMap<T> {
        &self.word2idx
    }

    /// The words, in index order.
    pub fn idx2word(&self) -> &[String] {
        &self.idx2word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_only() {
        type T = u32;
        let mut vocab = WordIndexVocab::<T>::with_mask("<MASK>");
        assert_eq!(vocab.lookup_token("<MASK>"), Some(0));
        assert_eq!(vocab.next_token(), 1);

        assert_eq!(vocab.get_or_insert("apple"), (1, true));
        assert_eq!(vocab.get_or_insert("banana"), (2, true));
        assert_eq!(vocab.get_or_insert("apple"), (1, false));
        assert_eq!(vocab.add_word("<MASK>"), 0);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup_word(2), Some("banana"));
        assert_eq!(vocab.lookup_word(3), None);
        assert_eq!(vocab.lookup_token("pear"), None);
    }

    #[test]
    fn test_round_trip() {
        type T = u16;
        let mut vocab = WordIndexVocab::<T>::with_mask("<MASK>");
        vocab.extend_words(["the", "cat", "sat", "the", "mat"]);

        for (word, &token) in vocab.word2idx() {
            assert_eq!(vocab.idx2word()[token as usize], *word);
        }
        for (token, word) in vocab.iter() {
            assert_eq!(vocab.lookup_token(word), Some(token));
        }
    }

    #[test]
    fn test_extend_words_reports_additions() {
        type T = u32;
        let mut vocab = WordIndexVocab::<T>::with_mask("<MASK>");
        vocab.add_word("a");

        let added = vocab.extend_words(["a", "b", "c", "b"]);
        assert_eq!(added, vec![("b".to_string(), 2), ("c".to_string(), 3)]);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn test_growth_past_token_type() {
        type T = u8;
        let mut vocab = WordIndexVocab::<T>::from_words((0..256).map(|i| i.to_string())).unwrap();
        assert_eq!(vocab.get_or_insert("255"), (255, false));
        vocab.get_or_insert("one too many");
    }

    #[test]
    fn test_from_words() {
        type T = u32;
        let vocab = WordIndexVocab::<T>::from_words(["<MASK>", "x", "y"]).unwrap();
        assert_eq!(vocab.lookup_token("y"), Some(2));

        assert_eq!(
            WordIndexVocab::<T>::from_words(["<MASK>", "x", "x"]),
            Err(SentokError::InvalidVocab("duplicate word \"x\"".to_string()))
        );
    }

    #[test]
    fn test_from_word_map() {
        type T = u32;
        let map: WordToTokenMap<T> = [("b", 1), ("<MASK>", 0), ("c", 2)]
            .iter()
            .map(|&(w, t)| (w.to_string(), t))
            .collect();
        let vocab = WordIndexVocab::from_word_map(map).unwrap();
        assert_eq!(vocab.idx2word(), &["<MASK>", "b", "c"]);

        let sparse: WordToTokenMap<T> = [("a", 0), ("b", 5)]
            .iter()
            .map(|&(w, t)| (w.to_string(), t))
            .collect();
        assert!(WordIndexVocab::from_word_map(sparse).is_err());

        let shared: WordToTokenMap<T> = [("a", 0), ("b", 0)]
            .iter()
            .map(|&(w, t)| (w.to_string(), t))
            .collect();
        assert!(WordIndexVocab::from_word_map(shared).is_err());
    }

    #[test]
    fn test_serde() {
        type T = u32;
        let vocab = WordIndexVocab::<T>::from_words(["<MASK>", "hi"]).unwrap();
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"["<MASK>","hi"]"#);

        let back: WordIndexVocab<T> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);

        assert!(serde_json::from_str::<WordIndexVocab<T>>(r#"["a","a"]"#).is_err());
    }
}
