//! # Word Index Vocabulary IO
//!
//! One word per line, as ``{base64(word)} {index}``; lines are written in
//! index order, and a loaded file must cover exactly ``0..lines``.

use crate::errors::SentokError;
use crate::types::{TokenType, WordToTokenMap};
use crate::vocab::word_vocab::WordIndexVocab;
use anyhow::Context;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load a [`WordIndexVocab`] from a vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_from_path<T, P>(path: P) -> anyhow::Result<WordIndexVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_vocab_from_reader(BufReader::new(file)).with_context(|| format!("loading {}", path.display()))
}

/// Load a [`WordIndexVocab`] from a [`BufRead`] stream.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn load_vocab_from_reader<T, R>(reader: R) -> anyhow::Result<WordIndexVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut word2idx: WordToTokenMap<T> = Default::default();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let Some((chunk, token)) = line.split_once(' ') else {
            return Err(SentokError::InvalidVocab(format!("line {}: expected \"<word> <index>\"", lineno + 1)).into());
        };

        let word = BASE64_STANDARD
            .decode(chunk)
            .with_context(|| format!("line {}: bad base64", lineno + 1))?;
        let word = String::from_utf8(word).with_context(|| format!("line {}: word is not utf-8", lineno + 1))?;

        let token: u64 = token
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad index {token:?}", lineno + 1))?;
        let token = T::from_u64(token).context("token out of range")?;

        if word2idx.insert(word.clone(), token).is_some() {
            return Err(SentokError::InvalidVocab(format!("line {}: duplicate word {word:?}", lineno + 1)).into());
        }
    }

    Ok(WordIndexVocab::from_word_map(word2idx)?)
}

/// Save a [`WordIndexVocab`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_to_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordIndexVocab<T>,
    path: P,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    save_vocab_to_writer(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`WordIndexVocab`] to a [`Write`] writer.
pub fn save_vocab_to_writer<T, W>(
    vocab: &WordIndexVocab<T>,
    writer: &mut W,
) -> anyhow::Result<()>
where
    T: TokenType,
    W: Write,
{
    for (idx, word) in vocab.idx2word().iter().enumerate() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(word), idx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let vocab = WordIndexVocab::<T>::from_words(["<MASK>", "apple", "two words", "\\newline"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_to_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: WordIndexVocab<T> = load_vocab_from_path(&path).expect("Failed to load vocab");

                assert_eq!(&vocab, &loaded);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_written_format() {
        let vocab = WordIndexVocab::<u16>::from_words(["<MASK>", "hi"]).unwrap();
        let mut buf = Vec::new();
        save_vocab_to_writer(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "PE1BU0s+ 0\naGk= 1\n");
    }

    #[test]
    fn test_unordered_lines() {
        let vocab: WordIndexVocab<u32> = load_vocab_from_reader("aGk= 1\nPE1BU0s+ 0\n".as_bytes()).unwrap();
        assert_eq!(vocab.idx2word(), &["<MASK>", "hi"]);
    }

    #[test]
    fn test_rejects_bad_files() {
        type T = u32;

        // Sparse indices.
        let err = load_vocab_from_reader::<T, _>("PE1BU0s+ 0\naGk= 5\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentokError>(),
            Some(SentokError::InvalidVocab(_))
        ));

        // Duplicate word.
        let err = load_vocab_from_reader::<T, _>("aGk= 0\naGk= 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentokError>(),
            Some(SentokError::InvalidVocab(_))
        ));

        // Missing index.
        assert!(load_vocab_from_reader::<T, _>("aGk=\n".as_bytes()).is_err());

        // Bad base64.
        assert!(load_vocab_from_reader::<T, _>("!!! 0\n".as_bytes()).is_err());
    }
}
