//! # Sentence Segmentor
//!
//! A sentence ends at a terminal delimiter followed by whitespace, unless the
//! delimiter looks like part of a number, an abbreviation, or a title:
//!
//! * the next character is not whitespace (`3.14`, `...`);
//! * the preceding character is uppercase (`J. Smith`);
//! * the preceding word is a title (`Dr. Grant`);
//! * the preceding character is not alphanumeric, and the character after the
//!   following whitespace is not uppercase (`... what`).

use crate::segmentation::sentence_config::SentenceConfig;
use crate::segmentation::title_check::check_if_title;

/// Group a document into sentence strings.
///
/// Sentences are trimmed; empty sentences are dropped. The last two characters
/// of the document never end a sentence early, they always belong to the final
/// sentence.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(document, config)))]
pub fn group_sentences(
    document: &str,
    config: &SentenceConfig,
) -> Vec<String> {
    let chars: Vec<char> = document.chars().collect();
    let n = chars.len();

    let mut sentences = Vec::new();
    let mut buf = String::new();

    for (p, &c) in chars.iter().enumerate() {
        buf.push(c);

        if p == 0 || p + 2 >= n || !config.is_terminal(c) {
            continue;
        }

        let prev = chars[p - 1];
        let next = chars[p + 1];
        let after = chars[p + 2];

        let prob_decimal = !next.is_whitespace();
        let other = !after.is_uppercase() && !prev.is_alphanumeric();
        let prob_abbrev = prev.is_uppercase();
        let prob_title = check_if_title(&buf[..buf.len() - c.len_utf8()], &config.titles);

        if !(prob_decimal || other || prob_abbrev || prob_title) {
            push_trimmed(&mut sentences, &buf);
            buf.clear();
        }
    }

    push_trimmed(&mut sentences, &buf);
    sentences
}

fn push_trimmed(
    sentences: &mut Vec<String>,
    buf: &str,
) {
    let s = buf.trim();
    if !s.is_empty() {
        sentences.push(s.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(document: &str) -> Vec<String> {
        group_sentences(document, &SentenceConfig::default())
    }

    #[test]
    fn test_simple() {
        assert_eq!(split("Hi there. Bye."), vec!["Hi there.", "Bye."]);
        assert_eq!(
            split("hello here is an easy string. How are you today?"),
            vec!["hello here is an easy string.", "How are you today?"]
        );
    }

    #[test]
    fn test_mixed_terminals_and_trailing_whitespace() {
        assert_eq!(
            split("\n\nWhat's up dawg? I am so happy! Today I turn 8.\n\n"),
            vec!["What's up dawg?", "I am so happy!", "Today I turn 8."]
        );
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(
            split("hi ... what's up, this is tough. sup"),
            vec!["hi ... what's up, this is tough.", "sup"]
        );
    }

    #[test]
    fn test_titles() {
        let config = SentenceConfig::default().with_titles(["dr"]);
        assert_eq!(
            group_sentences("Dr. Grant. Dr. grant.", &config),
            vec!["Dr. Grant.", "Dr. grant."]
        );

        assert_eq!(
            split("hi\nProf. hello here's a slightly harder string, Dr. Grant. Dr. grant."),
            vec![
                "hi\nProf. hello here's a slightly harder string, Dr. Grant.",
                "Dr. grant."
            ]
        );
    }

    #[test]
    fn test_title_after_non_breaking_space() {
        assert_eq!(
            split("x\u{a0}Dr. Who is. Here."),
            vec!["x\u{a0}Dr.", "Who is.", "Here."]
        );
    }

    #[test]
    fn test_without_titles() {
        let config = SentenceConfig::default().with_titles(Vec::<String>::new());
        assert_eq!(
            group_sentences("Ask Dr. Who. Now.", &config),
            vec!["Ask Dr.", "Who.", "Now."]
        );
    }

    #[test]
    fn test_abbreviations_and_decimals() {
        assert_eq!(
            split("I met J. Smith. He left."),
            vec!["I met J. Smith.", "He left."]
        );
        assert_eq!(
            split("Pi is 3.14 today. Yes."),
            vec!["Pi is 3.14 today.", "Yes."]
        );

        // The lookbehind is the true preceding character.
        assert_eq!(split("A. Bc"), vec!["A. Bc"]);
        assert_eq!(split("a. Bc"), vec!["a.", "Bc"]);
    }

    #[test]
    fn test_custom_terminals() {
        let config = SentenceConfig::default().with_terminals([';']);
        assert_eq!(
            group_sentences("one; Two. three; Four", &config),
            vec!["one;", "Two. three;", "Four"]
        );
    }

    #[test]
    fn test_degenerate_documents() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
        assert_eq!(split("A"), vec!["A"]);
        assert_eq!(split("Hi."), vec!["Hi."]);
    }
}
