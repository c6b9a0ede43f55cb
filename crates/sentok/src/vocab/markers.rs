//! # Reserved Marker Tokens

use crate::errors::SentokError;
use crate::types::TokenType;
use crate::vocab::word_vocab::WordIndexVocab;
use serde::{Deserialize, Serialize};

/// Default mask (padding) marker.
pub const DEFAULT_MASK: &str = "<MASK>";

/// Default sequence start marker.
pub const DEFAULT_START: &str = "<START>";

/// Default sequence stop marker.
pub const DEFAULT_STOP: &str = "<STOP>";

/// Default initialization marker.
pub const DEFAULT_INIT: &str = "<INIT>";

/// Names of the reserved marker words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Padding word; always index 0.
    pub mask: String,

    /// Written at position 0 when prepending.
    pub start: String,

    /// Written after the content when appending.
    pub stop: String,

    /// Reserved for decoder initialization.
    pub init: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK.to_string(),
            start: DEFAULT_START.to_string(),
            stop: DEFAULT_STOP.to_string(),
            init: DEFAULT_INIT.to_string(),
        }
    }
}

impl MarkerConfig {
    /// Set the mask word.
    pub fn with_mask<S: Into<String>>(
        self,
        mask: S,
    ) -> Self {
        Self {
            mask: mask.into(),
            ..self
        }
    }

    /// Set the start word.
    pub fn with_start<S: Into<String>>(
        self,
        start: S,
    ) -> Self {
        Self {
            start: start.into(),
            ..self
        }
    }

    /// Set the stop word.
    pub fn with_stop<S: Into<String>>(
        self,
        stop: S,
    ) -> Self {
        Self {
            stop: stop.into(),
            ..self
        }
    }

    /// Set the init word.
    pub fn with_init<S: Into<String>>(
        self,
        init: S,
    ) -> Self {
        Self {
            init: init.into(),
            ..self
        }
    }

    /// Check that `vocab` has the mask word at index 0.
    pub fn try_check_mask<T: TokenType>(
        &self,
        vocab: &WordIndexVocab<T>,
    ) -> Result<(), SentokError> {
        match vocab.lookup_token(&self.mask) {
            Some(token) if token == T::zero() => Ok(()),
            Some(token) => Err(SentokError::InvalidVocab(format!(
                "mask {:?} has index {token:?}, expected 0",
                self.mask
            ))),
            None => Err(SentokError::InvalidVocab(format!(
                "mask {:?} is missing",
                self.mask
            ))),
        }
    }

    /// Resolve the marker tokens, appending any missing start/stop/init words.
    ///
    /// The mask must already be present at index 0.
    pub fn resolve<T: TokenType>(
        &self,
        vocab: &mut WordIndexVocab<T>,
    ) -> Result<MarkerTokens<T>, SentokError> {
        self.try_check_mask(vocab)?;
        Ok(MarkerTokens {
            mask: T::zero(),
            start: vocab.add_word(&self.start),
            stop: vocab.add_word(&self.stop),
            init: vocab.add_word(&self.init),
        })
    }
}

/// Resolved marker indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerTokens<T: TokenType> {
    /// Mask index; always 0.
    pub mask: T,

    /// Start index.
    pub start: T,

    /// Stop index.
    pub stop: T,

    /// Init index.
    pub init: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_appends_missing() {
        type T = u32;
        let config = MarkerConfig::default();
        let mut vocab = WordIndexVocab::<T>::with_mask(DEFAULT_MASK);
        vocab.add_word(DEFAULT_STOP);

        let markers = config.resolve(&mut vocab).unwrap();
        assert_eq!(
            markers,
            MarkerTokens {
                mask: 0,
                start: 2,
                stop: 1,
                init: 3,
            }
        );
        assert_eq!(vocab.len(), 4);

        // Idempotent.
        assert_eq!(config.resolve(&mut vocab).unwrap(), markers);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn test_mask_must_be_zero() {
        type T = u32;
        let config = MarkerConfig::default().with_mask("<PAD>");

        let mut vocab = WordIndexVocab::<T>::with_mask(DEFAULT_MASK);
        assert!(config.resolve(&mut vocab).is_err());

        vocab.add_word("<PAD>");
        assert_eq!(
            config.try_check_mask(&vocab),
            Err(SentokError::InvalidVocab(
                "mask \"<PAD>\" has index 1, expected 0".to_string()
            ))
        );
    }
}
