//! # Character Class Scanner
//!
//! A single left-to-right pass over the code points of a string, driven by an
//! accumulator buffer:
//!
//! * identifier characters (alphanumerics, `_`, `<`, `>`) grow the buffer;
//! * delimiters flush the buffer and are dropped;
//! * whitespace flushes the buffer and is emitted as its own token;
//! * other punctuation flushes the buffer and is emitted as its own token;
//! * a backslash flushes the buffer and starts an escape sequence.
//!
//! Before each character is handled, a buffer equal to a special token is
//! emitted whole.
//!
//! ## Unterminated Escapes
//!
//! An escape that never becomes a special token is emitted as a literal
//! [`TokenKind::Escape`] token, backslash included, at the next forced flush:
//! a delimiter, whitespace, punctuation, or the end of input. It always lands
//! before the token that forced the flush. Consecutive backslashes accumulate
//! into a single escape.

use crate::scanning::scan_config::ScanConfig;

/// The escape sequence lead character.
pub const ESCAPE: char = '\\';

/// Is `c` part of an identifier run?
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '<' | '>')
}

/// Scan-time classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An identifier run, or a single digit when digit splitting.
    Word,

    /// A single whitespace character.
    Whitespace,

    /// A single punctuation or symbol character.
    Punct,

    /// A recognized special token.
    Special,

    /// An escape sequence that matched no special token.
    Escape,
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanToken {
    /// The token class.
    pub kind: TokenKind,

    /// The token text.
    pub text: String,
}

impl ScanToken {
    /// Create a new token.
    pub fn new<S: Into<String>>(
        kind: TokenKind,
        text: S,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Get the token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<ScanToken> for String {
    fn from(token: ScanToken) -> Self {
        token.text
    }
}

/// Delimiter + Special Token Scanner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scanner {
    config: ScanConfig,
}

impl From<ScanConfig> for Scanner {
    fn from(config: ScanConfig) -> Self {
        Self::new(config)
    }
}

impl Scanner {
    /// Create a new scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Get the scanner configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `text`, appending classified tokens to `tokens`.
    pub fn scan_append(
        &self,
        text: &str,
        tokens: &mut Vec<ScanToken>,
    ) {
        let mut buf = String::new();

        for c in text.chars() {
            if !buf.is_empty() && self.config.is_special(&buf) {
                self.flush_special(&mut buf, tokens);
            }

            if self.config.is_delimiter(c) {
                self.flush(&mut buf, tokens);
            } else if is_word_char(c) {
                buf.push(c);
            } else if c.is_whitespace() {
                self.flush(&mut buf, tokens);
                tokens.push(ScanToken::new(TokenKind::Whitespace, c));
            } else if c == ESCAPE {
                if !buf.ends_with(ESCAPE) {
                    self.flush(&mut buf, tokens);
                }
                buf.push(c);
            } else {
                self.flush(&mut buf, tokens);
                tokens.push(ScanToken::new(TokenKind::Punct, c));
            }
        }

        if self.config.is_special(&buf) {
            self.flush_special(&mut buf, tokens);
        } else {
            self.flush(&mut buf, tokens);
        }
    }

    /// Scan `text` into classified tokens.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn scan(
        &self,
        text: &str,
    ) -> Vec<ScanToken> {
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.scan_append(text, &mut tokens);
        tokens
    }

    /// Scan `text`, appending token strings to `tokens`.
    pub fn tokenize_append(
        &self,
        text: &str,
        tokens: &mut Vec<String>,
    ) {
        tokens.extend(self.scan(text).into_iter().map(String::from));
    }

    /// Scan `text` into token strings.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.tokenize_append(text, &mut tokens);
        tokens
    }

    /// Scan a batch of texts.
    pub fn tokenize_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<String>> {
        batch.iter().map(|s| self.tokenize(s.as_ref())).collect()
    }

    /// Emit a buffered special token verbatim; digit splitting still applies.
    fn flush_special(
        &self,
        buf: &mut String,
        tokens: &mut Vec<ScanToken>,
    ) {
        if buf.is_empty() {
            return;
        }
        if !self.push_split_digits(buf, tokens) {
            tokens.push(ScanToken::new(TokenKind::Special, buf.as_str()));
        }
        buf.clear();
    }

    /// Emit a buffered run, applying digit splitting and lowercasing.
    fn flush(
        &self,
        buf: &mut String,
        tokens: &mut Vec<ScanToken>,
    ) {
        if buf.is_empty() {
            return;
        }
        if !self.push_split_digits(buf, tokens) {
            let kind = if buf.starts_with(ESCAPE) {
                TokenKind::Escape
            } else {
                TokenKind::Word
            };
            let text = if self.config.lowercase {
                buf.to_lowercase()
            } else {
                buf.clone()
            };
            tokens.push(ScanToken::new(kind, text));
        }
        buf.clear();
    }

    /// Push each digit of an all-digit buffer as its own token.
    ///
    /// Returns `false`, pushing nothing, when digit splitting is off or the
    /// buffer holds a non-digit.
    fn push_split_digits(
        &self,
        buf: &str,
        tokens: &mut Vec<ScanToken>,
    ) -> bool {
        if !self.config.split_digits || !buf.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        tokens.extend(buf.chars().map(|c| ScanToken::new(TokenKind::Word, c)));
        true
    }
}

/// Tokenize a string.
///
/// Punctuation and whitespace characters become individual tokens; delimiter
/// characters separate tokens and are dropped, with runs of delimiters counted
/// as a single separation.
///
/// # Arguments
/// * `text` - the string to tokenize.
/// * `delimiters` - characters separating tokens.
/// * `special_tokens` - strings that are emitted as individual tokens;
///   must not contain delimiter characters.
/// * `split_digits` - split all-digit runs into single digits.
/// * `lowercase` - lowercase non-special tokens.
pub fn tokenize<S: AsRef<str>>(
    text: &str,
    delimiters: &[char],
    special_tokens: &[S],
    split_digits: bool,
    lowercase: bool,
) -> Vec<String> {
    let config = ScanConfig::empty()
        .with_delimiters(delimiters.iter().copied())
        .with_specials(special_tokens)
        .with_split_digits(split_digits)
        .with_lowercase(lowercase);

    Scanner::new(config).tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn default_tokenize(text: &str) -> Vec<String> {
        Scanner::default().tokenize(text)
    }

    fn strs(tokens: &[String]) -> Vec<&str> {
        tokens.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_scanner_is_send_sync() {
        let scanner = Scanner::default();
        check_is_send(&scanner);
        check_is_sync(&scanner);
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(
            strs(&default_tokenize("hello here is an easy string")),
            vec!["hello", "here", "is", "an", "easy", "string"]
        );
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(strs(&tokenize("a   b", &[' '], &[] as &[&str], false, false)), vec!["a", "b"]);
        assert_eq!(
            strs(&tokenize("  a,,b  ", &[' ', ','], &[] as &[&str], false, false)),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(
            strs(&default_tokenize("hello here's a slightly harder string")),
            vec!["hello", "here", "'", "s", "a", "slightly", "harder", "string"]
        );

        assert_eq!(
            strs(&default_tokenize("hi ... what's up, this is tough. sup")),
            vec![
                "hi", ".", ".", ".", "what", "'", "s", "up", ",", "this", "is", "tough", ".", "sup"
            ]
        );

        assert_eq!(
            strs(&default_tokenize("this should be\ndifficult")),
            vec!["this", "should", "be", "\n", "difficult"]
        );
    }

    #[test]
    fn test_identifier_chars() {
        assert_eq!(
            strs(&default_tokenize("<START> snake_case <STOP>")),
            vec!["<START>", "snake_case", "<STOP>"]
        );
    }

    #[test]
    fn test_special_tokens() {
        assert_eq!(strs(&default_tokenize("a\\newlineb")), vec!["a", "\\newline", "b"]);

        assert_eq!(
            strs(&default_tokenize("\\newline, this should be.\ndifficulter")),
            vec!["\\newline", ",", "this", "should", "be", ".", "\n", "difficulter"]
        );

        assert_eq!(
            strs(&default_tokenize("hello\\newlinesup dawg")),
            vec!["hello", "\\newline", "sup", "dawg"]
        );

        let tokens = Scanner::default().scan("x\\newline");
        assert_eq!(tokens[1], ScanToken::new(TokenKind::Special, "\\newline"));
    }

    #[test]
    fn test_non_escape_special_tokens() {
        let scanner = Scanner::new(ScanConfig::default().with_specials(["<eos>"]));
        assert_eq!(strs(&scanner.tokenize("end<eos>next")), vec!["end<eos>next"]);
        assert_eq!(strs(&scanner.tokenize("<eos>next")), vec!["<eos>", "next"]);
    }

    #[test]
    fn test_unterminated_escape() {
        let tokens = Scanner::default().scan("a \\foo, b");
        assert_eq!(
            tokens,
            vec![
                ScanToken::new(TokenKind::Word, "a"),
                ScanToken::new(TokenKind::Escape, "\\foo"),
                ScanToken::new(TokenKind::Punct, ","),
                ScanToken::new(TokenKind::Word, "b"),
            ]
        );

        // A bare escape is flushed before the punctuation that ends it.
        assert_eq!(strs(&default_tokenize("\\,ab")), vec!["\\", ",", "ab"]);

        // Backslashes accumulate.
        assert_eq!(strs(&default_tokenize("\\\\newline")), vec!["\\\\newline"]);

        // Trailing escape at end of input.
        assert_eq!(strs(&default_tokenize("ab\\")), vec!["ab", "\\"]);
    }

    #[test]
    fn test_split_digits() {
        let scanner = Scanner::new(ScanConfig::default().with_split_digits(true));
        assert_eq!(
            strs(&scanner.tokenize("turn 18 on a4")),
            vec!["turn", "1", "8", "on", "a4"]
        );

        let scanner = Scanner::new(ScanConfig::default());
        assert_eq!(strs(&scanner.tokenize("turn 18")), vec!["turn", "18"]);

        // All-digit special tokens are split too.
        let scanner = Scanner::new(
            ScanConfig::default()
                .with_specials(["42"])
                .with_split_digits(true),
        );
        assert_eq!(strs(&scanner.tokenize("423")), vec!["4", "2", "3"]);

        let scanner = Scanner::new(ScanConfig::default().with_specials(["42"]));
        assert_eq!(
            scanner.scan("42x"),
            vec![
                ScanToken::new(TokenKind::Special, "42"),
                ScanToken::new(TokenKind::Word, "x"),
            ]
        );
    }

    #[test]
    fn test_lowercase() {
        let scanner = Scanner::new(
            ScanConfig::default()
                .with_specials(["\\NewLine"])
                .with_lowercase(true),
        );
        assert_eq!(
            strs(&scanner.tokenize("Hello\\NewLine WORLD")),
            vec!["hello", "\\NewLine", "world"]
        );
    }

    #[test]
    fn test_alnum_and_spaces_split_on_whitespace() {
        let text = "the 3 quick foxes jumped 42 times";
        assert_eq!(
            default_tokenize(text),
            text.split(' ').map(str::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_batch_and_append() {
        let scanner = Scanner::default();
        assert_eq!(
            scanner.tokenize_batch(&["a b", "c"]),
            vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]
        );

        let mut buf = vec!["x".to_string()];
        scanner.tokenize_append("y z", &mut buf);
        assert_eq!(strs(&buf), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(default_tokenize("").is_empty());
        assert!(default_tokenize("     ").is_empty());
    }
}
