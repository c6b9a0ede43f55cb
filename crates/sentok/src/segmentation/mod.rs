//! # Sentence Segmentation

pub mod sentence_config;
pub mod sentence_segmentor;
pub mod sentence_tokenizer;
pub mod title_check;

pub use sentence_config::SentenceConfig;
pub use sentence_segmentor::group_sentences;
pub use sentence_tokenizer::{SentenceTokenizer, get_sent_arr};
pub use title_check::check_if_title;
